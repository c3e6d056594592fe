use std::path::Path;

fn main() {
    validate_license_catalog(Path::new("catalogs/licenses.json"));
    validate_ngram_index(Path::new("catalogs/ngram_keywords.json"));

    println!("cargo:rerun-if-changed=catalogs/licenses.json");
    println!("cargo:rerun-if-changed=catalogs/ngram_keywords.json");
    println!("cargo:rerun-if-changed=build.rs");
}

fn read_json(path: &Path) -> serde_json::Value {
    assert!(
        path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the file before building.\n",
        path.display()
    );

    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            path.display()
        );
    });

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            path.display()
        );
    })
}

fn validate_license_catalog(path: &Path) {
    let catalog = read_json(path);

    let licenses = catalog
        .get("licenses")
        .and_then(serde_json::Value::as_array)
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Missing 'licenses' array\n\
                 The catalog must have a top-level 'licenses' array.\n"
            )
        });

    for (i, license) in licenses.iter().enumerate() {
        let shortname = license
            .get("shortname")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: License at index {i} missing 'shortname' field\n")
            });
        let text = license
            .get("text")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: License '{shortname}' missing 'text' field\n")
            });
        assert!(
            !text.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: License '{shortname}' has empty text\n"
        );
    }

    println!("cargo:warning=Validated license catalog: {} licenses", licenses.len());
}

fn validate_ngram_index(path: &Path) {
    let index = read_json(path);

    let entries = index.as_object().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: N-gram index root must be a JSON object\n\
             Path: {}\n",
            path.display()
        )
    });

    for (shortname, phrases) in entries {
        let phrases = phrases.as_array().unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: N-gram entry '{shortname}' must be an array of phrases\n")
        });
        assert!(
            !phrases.is_empty(),
            "\n\nCATALOG BUILD ERROR: N-gram entry '{shortname}' has no phrases\n"
        );
    }
}
