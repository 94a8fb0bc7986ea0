#[cfg(test)]
mod util;
