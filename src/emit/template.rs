/// Includes every generated file starts with. The parser header is appended
/// separately since it is configurable.
pub const STD_INCLUDES: [&str; 2] = ["stdio.h", "stdlib.h"];

/// Closing row of every registration table.
pub const END_OF_OPTIONS: &str = "ARGS_END_OF_OPTIONS";

pub fn entry_point(table_name: &str) -> String {
    format!(
        r#"
int main(int argc, char *argv[])
{{
    if (parse_arguments(argc, argv, {table_name}) < 0)
    {{
        printf("Error parsing arguments\n");
        return -1;
    }}

    // Put stuff here

    return 0;
}}
"#
    )
}
