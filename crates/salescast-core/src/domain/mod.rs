mod date;
mod forecast;
mod sentiment;

pub use date::CalendarDate;
pub use forecast::ForecastRow;
pub use sentiment::{SentimentLabel, SentimentResult};
