/// Flags that never take a value.
///
/// Must stay in sync with the `bool` fields of [`crate::cli::Cli`].
pub const BOOLEAN_FLAGS: &[&str] = &[
    "--debug",
    "--plain",
    "--list-versions",
    "--include-matched-content",
];

fn is_flag(arg: &str) -> bool {
    arg.starts_with('-')
}

/// Move flags (and the values they consume) in front of positional arguments.
///
/// This lets `gh search-docs "ssh key" --debug` parse the same way as
/// `gh search-docs --debug "ssh key"`. Relative order within each group is
/// preserved and no argument is dropped.
///
/// Classification is by prefix only: a search term that starts with `-` is
/// treated as a flag.
pub fn reorder_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut flags = Vec::new();
    let mut positionals = Vec::new();

    let mut args = args.iter().map(|arg| arg.as_ref()).peekable();
    while let Some(arg) = args.next() {
        if !is_flag(arg) {
            positionals.push(arg.to_string());
            continue;
        }

        flags.push(arg.to_string());

        // `--size=5` carries its own value, boolean flags take none
        if arg.contains('=') || BOOLEAN_FLAGS.contains(&arg) {
            continue;
        }

        if let Some(value) = args.next_if(|next| !is_flag(next)) {
            flags.push(value.to_string());
        }
    }

    flags.extend(positionals);
    flags
}
