pub mod coins;
