pub mod algo;
pub mod playback;
pub mod sim;
pub mod trace;
pub mod viz;

#[cfg(test)]
mod test;
