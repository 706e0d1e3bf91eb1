//! The README template that ships with readmegen.
//!
//! Sections, in order: title and description, badges, table of contents,
//! features, installation, usage, project structure, dependencies, custom
//! sections, API docs, contributing, license, author, generation footer.
//! Optional sections are guarded by their `include_*` flag or by the fact
//! they show being non-empty.

use readmegen_core::domain::Template;

/// Handlebars source of the built-in template.
pub const DEFAULT_TEMPLATE: &str = r#"# {{project_name}}

{{project_description}}

{{#if include_badges}}
{{#if badges}}
{{#each badges}}
{{this}}
{{/each}}

{{/if}}
{{/if}}
{{#if include_toc}}
## Table of Contents

{{#if include_installation}}
- [Installation](#installation)
{{/if}}
{{#if include_usage}}
- [Usage](#usage)
{{/if}}
{{#if include_api_docs}}
- [API Documentation](#api-documentation)
{{/if}}
{{#if include_contributing}}
- [Contributing](#contributing)
{{/if}}
- [License](#license)

{{/if}}
## Features

- ✨ Feature 1
- 🚀 Feature 2
- 📦 Feature 3

{{#if include_installation}}
## Installation

### Requirements

- Python {{python_version}}

### Setup

```bash
{{#if git_url}}
# Clone the repository
git clone {{git_url}}
cd {{repository_name}}

{{/if}}
# Install dependencies
pip install -r requirements.txt
```

{{/if}}
{{#if include_usage}}
## Usage

### Basic usage

```python
import {{snake_case project_name}}
```

### Command line

```bash
{{#if entry_points}}
{{#each entry_points}}
python {{this}}
{{/each}}
{{else}}
python main.py --help
{{/if}}
```

{{/if}}
{{#if project_structure}}
## Project Structure

```
{{project_structure}}
```

{{/if}}
{{#if dependencies}}
## Dependencies

{{#each dependencies}}
- {{this}}
{{/each}}

{{/if}}
{{#each custom_sections}}
## {{title}}

{{content}}

{{/each}}
{{#if include_api_docs}}
## API Documentation

See the [docs/](docs/) directory for the full API reference.

{{/if}}
{{#if include_contributing}}
## Contributing

Contributions are welcome! See [CONTRIBUTING.md](CONTRIBUTING.md) for details.

### Development setup

```bash
{{#if git_url}}
git clone {{git_url}}
cd {{repository_name}}
{{/if}}
python -m venv venv
source venv/bin/activate  # Windows: venv\Scripts\activate
pip install -r requirements-dev.txt
```

{{/if}}
## License

This project is licensed under the {{license}} License. See the [LICENSE](LICENSE) file for details.

## Author

{{author}}

---

*This README was generated by readmegen on {{generated_date}}*
"#;

/// The built-in template as a domain value.
pub fn default_template() -> Template {
    Template::builtin(DEFAULT_TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::HandlebarsRenderer;
    use readmegen_core::{
        application::ports::TemplateRenderer,
        domain::{CustomSection, ProjectFacts},
    };

    fn render(facts: &ProjectFacts) -> String {
        HandlebarsRenderer::new()
            .render(&default_template(), facts)
            .unwrap()
    }

    fn full_facts() -> ProjectFacts {
        ProjectFacts {
            project_name: "my-tool".into(),
            project_description: "Does things".into(),
            author: "Ada".into(),
            license: "MIT".into(),
            python_version: "3.8+".into(),
            generated_date: "2026-10-17 12:00:00".into(),
            include_badges: true,
            include_toc: true,
            include_installation: true,
            include_usage: true,
            include_contributing: true,
            github_username: "alice".into(),
            repository_name: "my-tool".into(),
            git_url: "https://github.com/alice/my-tool".into(),
            project_structure: "my-tool/\n└── main.py".into(),
            dependencies: ["click".to_string()].into_iter().collect(),
            entry_points: vec!["main.py".into()],
            badges: vec!["![GitHub stars](https://img.shields.io/github/stars/alice/my-tool)".into()],
            custom_sections: vec![CustomSection {
                title: "FAQ".into(),
                content: "Ask away.".into(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn empty_facts_keep_license_author_and_footer() {
        let out = render(&ProjectFacts::default());
        assert!(out.contains("## License"));
        assert!(out.contains("## Author"));
        assert!(out.contains("*This README was generated by readmegen on"));
        assert!(!out.contains("## Dependencies"));
        assert!(!out.contains("## Table of Contents"));
    }

    #[test]
    fn sections_follow_documented_order() {
        let out = render(&full_facts());
        let order = [
            "# my-tool",
            "![GitHub stars]",
            "## Table of Contents",
            "## Features",
            "## Installation",
            "## Usage",
            "## Project Structure",
            "## Dependencies",
            "## FAQ",
            "## Contributing",
            "## License",
            "## Author",
            "2026-10-17 12:00:00",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{out}");
    }

    #[test]
    fn usage_lists_entry_points_and_import() {
        let out = render(&full_facts());
        assert!(out.contains("import my_tool"));
        assert!(out.contains("python main.py"));
        assert!(!out.contains("--help"));
    }

    #[test]
    fn toc_entries_follow_flags() {
        let facts = ProjectFacts {
            include_toc: true,
            include_api_docs: true,
            ..Default::default()
        };
        let out = render(&facts);
        assert!(out.contains("- [API Documentation](#api-documentation)"));
        assert!(out.contains("- [License](#license)"));
        assert!(!out.contains("- [Installation]"));
        assert!(!out.contains("- [Contributing]"));
    }

    #[test]
    fn badges_need_the_flag() {
        let facts = ProjectFacts {
            include_badges: false,
            ..full_facts()
        };
        assert!(!render(&facts).contains("img.shields.io"));
    }
}
