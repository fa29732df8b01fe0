/// Reapplies the capitalisation of `original` to `corrected`.
///
/// When both have the same number of words the casing is copied word by
/// word, through a character alignment of each pair. Otherwise words were split or merged and
/// only the line-level pattern (all caps, leading capital) is kept.
pub fn transfer_casing(original: &str, corrected: &str) -> String {
    let source: Vec<&str> = original.split_whitespace().collect();
    let target: Vec<&str> = corrected.split_whitespace().collect();

    if source.len() == target.len() {
        return source
            .iter()
            .zip(target.iter())
            .map(|(s, t)| transfer_word_casing(s, t))
            .collect::<Vec<String>>()
            .join(" ");
    }

    transfer_line_casing(original, corrected)
}

fn is_all_caps(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

fn set_case(c: char, upper: bool) -> String {
    if upper {
        c.to_uppercase().collect()
    } else {
        c.to_lowercase().collect()
    }
}

fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

/// Lines `target` up against `source` along a minimal edit script. Each
/// target character maps to the source character it matches or replaces,
/// or to `None` where it was inserted.
fn align(source: &[char], target: &[char]) -> Vec<Option<usize>> {
    let (n, m) = (source.len(), target.len());
    let mut dist = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in dist.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dist[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(!same_letter(source[i - 1], target[j - 1]));
            dist[i][j] = (dist[i - 1][j - 1] + cost)
                .min(dist[i - 1][j] + 1)
                .min(dist[i][j - 1] + 1);
        }
    }

    let mut aligned = vec![None; m];
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        let cost = usize::from(!same_letter(source[i - 1], target[j - 1]));
        if dist[i][j] == dist[i - 1][j - 1] + cost {
            aligned[j - 1] = Some(i - 1);
            i -= 1;
            j -= 1;
        } else if dist[i][j] == dist[i - 1][j] + 1 {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    aligned
}

/// Copies case through the alignment. An inserted character is upper case
/// only when the aligned characters on both sides of it are. The first
/// letter always follows the source's first letter, so dropped prefixes
/// such as `(` or a stray `i` don't move a capital.
fn transfer_word_casing(source: &str, target: &str) -> String {
    if is_all_caps(source) {
        return target.to_uppercase();
    }

    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let aligned = align(&source_chars, &target_chars);

    let aligned_case: Vec<Option<bool>> = aligned
        .iter()
        .map(|a| a.map(|i| source_chars[i].is_uppercase()))
        .collect();
    let upper: Vec<bool> = (0..aligned_case.len())
        .map(|j| match aligned_case[j] {
            Some(case) => case,
            None => {
                let before = aligned_case[..j].iter().rev().flatten().next();
                let after = aligned_case[j + 1..].iter().flatten().next();
                match (before, after) {
                    (Some(b), Some(a)) => *b && *a,
                    (Some(case), None) | (None, Some(case)) => *case,
                    (None, None) => false,
                }
            }
        })
        .collect();

    let leading_upper = source_chars
        .iter()
        .find(|c| c.is_alphabetic())
        .map(|c| c.is_uppercase());
    let mut seen_letter = false;

    target_chars
        .iter()
        .zip(upper)
        .map(|(&c, mut case)| {
            if !seen_letter && c.is_alphabetic() {
                seen_letter = true;
                case = leading_upper.unwrap_or(case);
            }
            set_case(c, case)
        })
        .collect()
}

fn transfer_line_casing(original: &str, corrected: &str) -> String {
    if is_all_caps(original) {
        return corrected.to_uppercase();
    }

    let leading_upper = original
        .chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(char::is_uppercase);
    if !leading_upper {
        return corrected.to_string();
    }

    let mut capitalised = String::with_capacity(corrected.len());
    let mut done = false;
    for c in corrected.chars() {
        if !done && c.is_alphabetic() {
            capitalised.extend(c.to_uppercase());
            done = true;
        } else {
            capitalised.push(c);
        }
    }
    capitalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_aligned_casing() {
        assert_eq!(transfer_casing("Helo wrold", "hello world"), "Hello world");
        assert_eq!(transfer_casing("helo WROLD", "hello world"), "hello WORLD");
        assert_eq!(transfer_casing("McDonlds", "mcdonalds"), "McDonalds");
    }

    #[test]
    fn test_leading_punctuation_does_not_shift_capitals() {
        assert_eq!(transfer_casing("(Helo wrold", "hello world"), "Hello world");
        assert_eq!(transfer_casing("\"Helo wrold", "hello world"), "Hello world");
    }

    #[test]
    fn test_dropped_first_letter_does_not_shift_capitals() {
        assert_eq!(transfer_casing("iPhone", "phone"), "phone");
        assert_eq!(transfer_casing("iPhone wrold", "phone world"), "phone world");
    }

    #[test]
    fn test_inserted_characters_follow_neighbour() {
        assert_eq!(transfer_casing("HelO", "hellos"), "HellOS");
        assert_eq!(transfer_casing("Wrld", "world"), "World");
    }

    #[test]
    fn test_split_and_merge_keep_line_pattern() {
        assert_eq!(transfer_casing("Whereis the", "where is the"), "Where is the");
        assert_eq!(transfer_casing("THE LOVE HE HAD", "the love he had"), "THE LOVE HE HAD");
        assert_eq!(transfer_casing("WHEREIS", "where is"), "WHERE IS");
        assert_eq!(transfer_casing("whereis", "where is"), "where is");
    }
}
