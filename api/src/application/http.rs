pub mod health;
pub mod nutrition;
pub mod server;

#[cfg(test)]
mod test;
