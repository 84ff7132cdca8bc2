mod calculator;

pub use calculator::RatingCalculator;
