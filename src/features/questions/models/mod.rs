pub mod question;

pub use question::{NewQuestion, Question};
