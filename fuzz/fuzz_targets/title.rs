#![no_main]

use libfuzzer_sys::fuzz_target;

use nblist::Notebook;

fuzz_target!(|s: &str| {
    if let Ok(notebook) = s.parse::<Notebook>() {
        if let Ok(title) = notebook.title() {
            assert_eq!(title.trim(), title);
        }
    }
});
