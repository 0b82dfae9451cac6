pub mod conversions;
pub mod error;
pub mod number;
pub mod summary;
pub mod weather;

pub use error::WeatherError;
pub use summary::{AlertEntry, AlertSummary, ForecastPeriod, ForecastSummary};
pub use weather::{WeatherClient, WeatherConfig};
