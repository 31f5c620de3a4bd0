fn main() {
    if let Err(error) = ideaforge_frontend::logging::init() {
        web_sys::console::error_1(&error.to_string().into());
    }
    wasm_bindgen_futures::spawn_local(ideaforge_frontend::start());
}
