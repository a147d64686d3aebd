pub mod errors;
pub mod db;
pub mod order;
pub mod sale;

#[cfg(test)]
mod tests;
