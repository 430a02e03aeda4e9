pub mod basic;
pub mod csv_files;
pub mod random;
pub mod scenario;
