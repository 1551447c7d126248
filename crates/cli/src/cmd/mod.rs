pub mod check;
pub mod date;
pub mod doctor;
pub mod output;
pub mod range;
pub mod string;
