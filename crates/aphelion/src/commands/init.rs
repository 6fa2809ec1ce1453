//! Scaffold a new hub project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::project::PROJECT_FILE;

/// Files written by `init`, relative to the root.
const SCAFFOLD: &[(&str, &str)] = &[
    (PROJECT_FILE, DEFAULT_PROJECT),
    ("src/index.html", DEFAULT_SHELL),
    ("src/styles.css", DEFAULT_STYLES),
    ("src/app.js", DEFAULT_SCRIPT),
    ("config/games.json", DEFAULT_GAMES),
];

/// Run the init command.
pub fn run(root: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing APHELION project in {}...", root.display());

    for (relative, content) in SCAFFOLD {
        let path = root.join(relative);

        if path.exists() && !yes {
            tracing::warn!("{} already exists. Use --yes to overwrite.", relative);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", relative))?;
        tracing::info!("Created {}", relative);
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'aphelion build' to produce dist/index.html.");

    Ok(())
}

const DEFAULT_PROJECT: &str = r#"# APHELION project file. Every key is optional.

[paths]
# Inputs, relative to the project root
script = "src/app.js"
shell = "src/index.html"
styles = "src/styles.css"
config = "config/games.json"

# Output directory; the page is written to <out_dir>/index.html
out_dir = "dist"

[markers]
# Replaced in the script by the compacted config JSON
config_placeholder = "__APHELION_CONFIG__"

# Insertion points in the shell
styles = "__STYLES__"
script = "__SCRIPT__"
"#;

const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>APHELION</title>
  <style>
__STYLES__
  </style>
</head>
<body>
  <header>
    <h1 id="title">APHELION</h1>
    <input id="search" type="search" placeholder="Search games">
  </header>
  <main id="grid"></main>
  <script>
__SCRIPT__
  </script>
</body>
</html>
"#;

const DEFAULT_STYLES: &str = r#":root {
  --bg: #0b0b10;
  --fg: #e8e8f0;
  --accent: #6366f1;
}

body {
  margin: 0;
  font-family: system-ui, sans-serif;
  background: var(--bg);
  color: var(--fg);
}

header {
  display: flex;
  gap: 1rem;
  align-items: center;
  padding: 1rem 2rem;
}

#grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
  padding: 2rem;
}

.card {
  border: 1px solid var(--accent);
  border-radius: 0.5rem;
  padding: 1rem;
}
"#;

const DEFAULT_SCRIPT: &str = r#"(function() {
  'use strict';

  // Injected at build time
  const CONFIG = __APHELION_CONFIG__;

  const grid = document.querySelector('#grid');
  const search = document.querySelector('#search');

  function render() {
    const query = search.value.toLowerCase();
    grid.innerHTML = CONFIG.games
      .filter(g => g.title.toLowerCase().includes(query))
      .map(g => `<article class="card"><h3>${g.title}</h3><span>${g.category}</span></article>`)
      .join('');
  }

  search.addEventListener('input', render);
  render();
})();
"#;

const DEFAULT_GAMES: &str = r#"{
  "categories": [
    { "id": "arcade", "label": "Arcade" },
    { "id": "puzzle", "label": "Puzzle" }
  ],
  "games": [
    { "id": "snake", "title": "Snake", "category": "arcade", "url": "https://example.com/snake" },
    { "id": "2048", "title": "2048", "category": "puzzle", "url": "https://example.com/2048" }
  ]
}
"#;
