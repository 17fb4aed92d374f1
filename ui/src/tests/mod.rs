#[cfg(not(target_arch = "wasm32"))]
mod site_render;
