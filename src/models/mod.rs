pub mod bleeding;
pub mod day_record;
pub mod frequency;
pub mod mucus;
pub mod observation;
pub mod stamp;

pub use bleeding::BleedingType;
pub use day_record::DayRecord;
pub use frequency::Frequency;
pub use mucus::{Mucus, MucusColor, MucusConsistency, MucusType};
pub use observation::{Observation, ObservationInput};
pub use stamp::{Stamp, StampColor};
