pub mod answer;
pub mod embed;
pub mod health;
