pub mod aids;
pub mod challenges;
pub mod customize;
pub mod items;
pub mod knowledge;
pub mod users;
