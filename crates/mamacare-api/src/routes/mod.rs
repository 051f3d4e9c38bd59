pub mod checkins;
pub mod health;
pub mod mothers;
pub mod pregnancies;
