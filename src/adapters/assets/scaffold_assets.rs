use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{AppError, Category};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

const README_TEMPLATE: &str = "README.md.j2";
const CONFIG_TEMPLATE: &str = "bntf-docs.toml.j2";

/// Values the scaffold templates are rendered with.
#[derive(Debug, Clone)]
pub struct ScaffoldContext {
    pub owner: Option<String>,
    pub repo: String,
    pub branch: String,
    pub template: String,
    /// A document already in the tree, shown as a concrete URL example.
    pub example: Option<(String, String)>,
    pub index_url: String,
    pub index_file: String,
    pub index_version: String,
    pub app_repository: String,
    pub event_type: String,
    pub token_env: String,
    pub remote: String,
    pub commit_message: String,
}

#[derive(Serialize)]
struct CategoryRow {
    dir: &'static str,
    label: &'static str,
    icon: &'static str,
}

pub fn render_readme(ctx: &ScaffoldContext) -> Result<String, AppError> {
    let categories: Vec<CategoryRow> = Category::ALL
        .into_iter()
        .map(|category| CategoryRow {
            dir: category.dir_name(),
            label: category.display_name(),
            icon: category.icon(),
        })
        .collect();

    render(
        README_TEMPLATE,
        context! {
            repo => ctx.repo,
            branch => ctx.branch,
            template => ctx.template,
            example => ctx.example.as_ref().map(|(_, url)| url),
            example_path => ctx.example.as_ref().map(|(path, _)| path),
            index_url => ctx.index_url,
            index_file => ctx.index_file,
            categories => categories,
        },
    )
}

pub fn render_config(ctx: &ScaffoldContext) -> Result<String, AppError> {
    render(
        CONFIG_TEMPLATE,
        context! {
            owner => ctx.owner,
            repo => ctx.repo,
            branch => ctx.branch,
            index_file => ctx.index_file,
            index_version => ctx.index_version,
            app_repository => ctx.app_repository,
            event_type => ctx.event_type,
            token_env => ctx.token_env,
            remote => ctx.remote,
            commit_message => ctx.commit_message,
        },
    )
}

fn render(name: &str, values: minijinja::Value) -> Result<String, AppError> {
    let source = SCAFFOLD_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::TemplateError(format!("Missing embedded template {name}")))?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_template(name, source)
        .map_err(|e| AppError::TemplateError(format!("{name}: {e}")))?;

    let template =
        env.get_template(name).map_err(|e| AppError::TemplateError(format!("{name}: {e}")))?;
    template.render(values).map_err(|e| AppError::TemplateError(format!("{name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_config_content;

    fn ctx(owner: Option<&str>) -> ScaffoldContext {
        ScaffoldContext {
            owner: owner.map(str::to_string),
            repo: "bntf-union-documents".to_string(),
            branch: "main".to_string(),
            template: "https://raw.githubusercontent.com/o/bntf-union-documents/main/<category>/<filename>.pdf".to_string(),
            example: Some((
                "Policies/x.pdf".to_string(),
                "https://raw.githubusercontent.com/o/bntf-union-documents/main/Policies/x.pdf"
                    .to_string(),
            )),
            index_url: "https://raw.githubusercontent.com/o/bntf-union-documents/main/pdf-index.json".to_string(),
            index_file: "pdf-index.json".to_string(),
            index_version: "2.0".to_string(),
            app_repository: "bntf-ios-app".to_string(),
            event_type: "document_update".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            remote: "origin".to_string(),
            commit_message: "Update documents".to_string(),
        }
    }

    #[test]
    fn readme_lists_every_category_and_the_url_template() {
        let readme = render_readme(&ctx(Some("o"))).unwrap();
        for category in Category::ALL {
            assert!(readme.contains(&format!("`{}/`", category.dir_name())));
        }
        assert!(readme.contains("/main/<category>/<filename>.pdf"));
        assert!(readme.contains("/main/Policies/x.pdf"));
    }

    #[test]
    fn readme_omits_example_without_documents() {
        let readme = render_readme(&ScaffoldContext { example: None, ..ctx(Some("o")) }).unwrap();
        assert!(!readme.contains("For example"));
    }

    #[test]
    fn rendered_config_parses() {
        let with_owner = render_config(&ctx(Some("o"))).unwrap();
        let config = parse_config_content(&with_owner).unwrap();
        assert_eq!(config.repository.owner.as_deref(), Some("o"));

        let without_owner = render_config(&ctx(None)).unwrap();
        let config = parse_config_content(&without_owner).unwrap();
        assert_eq!(config.repository.owner, None);
        assert_eq!(config.repository.name.as_deref(), Some("bntf-union-documents"));
    }
}
