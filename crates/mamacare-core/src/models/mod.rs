pub mod checkin;
pub mod mother;
pub mod pregnancy;
