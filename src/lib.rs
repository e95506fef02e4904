pub mod counter;
pub mod model;
pub mod report;
pub mod worker;
