pub mod common {
    pub mod cli;
    pub mod logger;
    pub mod runner;
}
