#[cfg(all(feature = "cli", not(target_arch = "wasm32")))]
mod cmdline;
mod parse;
mod random_input;
mod regions;
#[cfg(feature = "json")]
mod render;
mod scale;
