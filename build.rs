use std::path::Path;

fn main() {
    let data_path = Path::new("data/ores.csv");
    validate_data_file(data_path);
    set_build_dependencies();
}

fn validate_data_file(data_path: &Path) {
    // Ensure the embedded dataset exists at build time
    assert!(
        data_path.exists(),
        "\n\nDATA BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the ore data file before building.\n",
        data_path.display()
    );

    let contents = std::fs::read_to_string(data_path).unwrap_or_else(|e| {
        panic!(
            "\n\nDATA BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            data_path.display()
        );
    });

    validate_table_structure(data_path, &contents);
}

fn validate_table_structure(data_path: &Path, contents: &str) {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let Some((_, header)) = lines.next() else {
        panic!(
            "\n\nDATA BUILD ERROR: Empty data file\n\
             Path: {}\n\
             The file must have a header row and at least one ore row.\n",
            data_path.display()
        );
    };

    let columns: Vec<String> = header.split(',').map(|c| c.trim().to_lowercase()).collect();
    let y_column = columns
        .iter()
        .position(|c| c == "y level" || c == "y-level" || c == "y")
        .unwrap_or_else(|| {
            panic!(
                "\n\nDATA BUILD ERROR: Missing 'Y Level' column\n\
                 Header: {header}\n"
            );
        });

    let mut rows = 0;
    for (line_num, line) in lines {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        assert!(
            fields.len() == columns.len(),
            "\n\nDATA BUILD ERROR: Line {line_num} has {} fields, expected {}\n\
             Line: {line}\n",
            fields.len(),
            columns.len()
        );
        assert!(
            fields[y_column].parse::<i32>().is_ok(),
            "\n\nDATA BUILD ERROR: Line {line_num} has a non-integer Y level\n\
             Value: '{}'\n",
            fields[y_column]
        );
        rows += 1;
    }

    assert!(
        rows > 0,
        "\n\nDATA BUILD ERROR: No ore rows found\n\
         Path: {}\n",
        data_path.display()
    );

    println!("cargo:warning=Validated ore data: {rows} resources");
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the embedded dataset changes
    println!("cargo:rerun-if-changed=data/ores.csv");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
