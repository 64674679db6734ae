pub mod health;
pub mod logsheet;
pub mod trip;
