//! Clock-based order number generator

use chrono::Utc;
use rand::Rng;

use crate::domain::entities::OrderNumber;
use crate::domain::ports::OrderNumberGenerator;

/// Current time in milliseconds plus one random digit
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockOrderNumberGenerator;

impl OrderNumberGenerator for ClockOrderNumberGenerator {
    fn next_number(&self) -> OrderNumber {
        let millis = Utc::now().timestamp_millis();
        let digit: u8 = rand::thread_rng().gen_range(0..10);
        OrderNumber::from_parts(millis, digit)
    }
}
