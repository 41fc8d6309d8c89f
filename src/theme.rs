/// Toggle the `dark-mode` class on `<body>`.
pub fn apply_dark_mode(enabled: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(body) = doc.body() {
                let _ = body
                    .class_list()
                    .toggle_with_force("dark-mode", enabled);
            }
        }
    }
}
