mod scaffold_assets;

pub use scaffold_assets::{ScaffoldContext, render_config, render_readme};
