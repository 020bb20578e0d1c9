//! Demo binary for docs-fmt visual testing.

use docs_fmt::{StyleConfig, TermRenderer, Theme};

fn main() {
    let demo_blocks = [
        "1. About SSH\n   https://docs.github.com/en/authentication/connecting-to-github-with-ssh/about-ssh\n   Using the SSH protocol, you can connect and authenticate to remote servers and services.\n\n",
        "2. Generating a new <mark>SSH</mark> key\n   https://docs.github.com/en/authentication/connecting-to-github-with-ssh/generating-a-new-ssh-key\n   • After you've checked for existing <mark>SSH</mark> keys, you can generate a new <mark>SSH key</mark>\n   • Add the `ssh-ed25519` key to the agent\n\n",
        "# Heading Level 1\n\nA paragraph with **bold text**, *italic text* and a [link](https://example.com).\n\n> This is a blockquote.\n\n---\n\n```bash\nssh -T git@github.com\n```\n",
    ];

    // `docs-fmt-demo [auto|dark|light]` shows one theme, otherwise both
    let themes = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<Theme>() {
            Ok(theme) => vec![theme],
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        None => vec![Theme::Dark, Theme::Light],
    };

    println!("=== docs-fmt Demo ===\n");
    for theme in themes {
        println!("--- {:?} ---\n", theme);
        let renderer = TermRenderer::new(StyleConfig::no_wrap(theme));
        for block in demo_blocks {
            match renderer.render(block) {
                Ok(styled) => print!("{}", styled),
                Err(_) => print!("{}", block),
            }
        }
    }

    println!("--- Wrapped at 40 columns ---\n");
    let renderer = TermRenderer::new(StyleConfig {
        theme: Theme::Auto,
        wrap: 40,
    });
    if let Ok(styled) = renderer.render(demo_blocks[0]) {
        print!("{}", styled);
    }
}
