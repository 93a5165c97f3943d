mod record;

pub use record::DailyRecord;
