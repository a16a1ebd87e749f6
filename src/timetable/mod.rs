pub mod countdown;
pub mod makrooh;
pub mod resolve;
