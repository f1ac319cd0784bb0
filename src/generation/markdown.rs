//! Tera-based markdown renderer for the README generators section

use serde::Serialize;
use tera::{Context, Tera};
use url::Url;

use crate::collection::{DependencyKind, Generator, PackageManifest, Property};
use crate::core::error::Result;

const HEADER_TEMPLATE_NAME: &str = "header.md";
const GENERATOR_TEMPLATE_NAME: &str = "generator.md";

const HEADER_TEMPLATE: &str = "\n\
* [Install](#installation)\n\
* [Usage](#usage)\n\
* [Available generators](#available-generators)\n\
\n\
# Installation\n\
```bash\n\
npm install -g @angular-devkit/schematics-cli\n\
npm install --save-dev {{ package_name }}\n\
```\n\
\n\
# Usage\n\
```bash\n\
{{ cli_command }} {{ package_name }}:<generator name> <arguments>\n\
```\n\
\n\
# Available generators\n\
{% for generator in generators %}* [{{ generator.title }}](#{{ generator.anchor }}) - {{ generator.summary }}{% if not loop.last %}\n{% endif %}{% endfor %}";

const GENERATOR_TEMPLATE: &str = "## {{ title }}\n\
{{ description }}\n\
\n\
{% if plural_examples %}Examples{% else %}Example{% endif %}:\n\
```bash\n\
{% for example in examples %}{{ cli_command }} {{ package_name }}:{{ example }}{% if not loop.last %}\n{% endif %}{% endfor %}\n\
```\n\
{% if has_parameters %}\n\
### Parameters\n\
| Name | Type | Description | Default |\n\
|------|:----:|------------:|--------:|\n\
{% for parameter in parameters %}| {{ parameter.name }} | {% if parameter.required %}*required* {% endif %}{{ parameter.type_label }} | {{ parameter.description }} | {{ parameter.default }} |{% if not loop.last %}\n{% endif %}{% endfor %}\
{% endif %}\n\
{% for section in dependency_sections %}{% if section.has_rows %}\n\
### {{ section.title }}\n\
| Name | Used | Current |\n\
| ------ | ------ | ------ |\n\
{% for dependency in section.rows %}| [{{ dependency.name }}]({{ dependency.npm_url }}) | [![NPM version]({{ dependency.used_badge }})]({{ dependency.npm_url }}) | [![NPM version]({{ dependency.current_badge }})]({{ dependency.npm_url }}) |{% if not loop.last %}\n{% endif %}{% endfor %}\
{% endif %}{% if not loop.last %}\n{% endif %}{% endfor %}";

#[derive(Debug, Serialize)]
struct IndexEntry<'a> {
    title: &'a str,
    anchor: &'a str,
    summary: &'a str,
}

#[derive(Debug, Serialize)]
struct ParameterRow {
    name: String,
    required: bool,
    type_label: String,
    description: String,
    default: String,
}

#[derive(Debug, Serialize)]
struct DependencyRow {
    name: String,
    npm_url: String,
    used_badge: String,
    current_badge: String,
}

#[derive(Debug, Serialize)]
struct DependencySection {
    title: &'static str,
    has_rows: bool,
    rows: Vec<DependencyRow>,
}

/// Renders the generated README section
pub struct MarkdownRenderer {
    tera: Tera,
    cli_command: String,
}

impl MarkdownRenderer {
    /// Create a renderer whose snippets invoke `cli_command`
    pub fn new(cli_command: impl Into<String>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (HEADER_TEMPLATE_NAME, HEADER_TEMPLATE),
            (GENERATOR_TEMPLATE_NAME, GENERATOR_TEMPLATE),
        ])?;

        Ok(Self {
            tera,
            cli_command: cli_command.into(),
        })
    }

    /// Installation, usage and the index of available generators
    pub fn render_header(&self, package: &PackageManifest, generators: &[Generator]) -> Result<String> {
        let entries: Vec<IndexEntry<'_>> = generators
            .iter()
            .map(|generator| IndexEntry {
                title: &generator.title,
                anchor: &generator.name,
                summary: generator.summary(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("package_name", &package.name);
        context.insert("cli_command", &self.cli_command);
        context.insert("generators", &entries);

        Ok(self.tera.render(HEADER_TEMPLATE_NAME, &context)?)
    }

    /// Documentation block for one generator
    pub fn render_generator(&self, package: &PackageManifest, generator: &Generator) -> Result<String> {
        let examples = if generator.examples.is_empty() {
            vec![generator.id.clone()]
        } else {
            generator.examples.clone()
        };

        let parameters: Vec<ParameterRow> = generator
            .properties
            .iter()
            .map(|(name, property)| ParameterRow {
                name: name.clone(),
                required: generator.is_required(name),
                type_label: format!(
                    "{{{}}}",
                    property.kind.as_ref().map(ToString::to_string).unwrap_or_default()
                ),
                description: property.description.clone().unwrap_or_default(),
                default: default_label(property),
            })
            .collect();

        let dependency_sections: Vec<DependencySection> = DependencyKind::ALL
            .iter()
            .map(|kind| {
                let rows: Vec<DependencyRow> = kind
                    .of(generator)
                    .iter()
                    .map(|(name, version)| dependency_row(name, version))
                    .collect();
                DependencySection {
                    title: kind.title(),
                    has_rows: !rows.is_empty(),
                    rows,
                }
            })
            .collect();

        let mut context = Context::new();
        context.insert("title", &generator.title);
        context.insert("description", &generator.description);
        context.insert("package_name", &package.name);
        context.insert("cli_command", &self.cli_command);
        context.insert("plural_examples", &(examples.len() > 1));
        context.insert("examples", &examples);
        context.insert("has_parameters", &!parameters.is_empty());
        context.insert("parameters", &parameters);
        context.insert("dependency_sections", &dependency_sections);

        Ok(self.tera.render(GENERATOR_TEMPLATE_NAME, &context)?)
    }

    /// Everything placed between the README markers
    pub fn render_section(&self, package: &PackageManifest, generators: &[Generator]) -> Result<String> {
        let header = self.render_header(package, generators)?;
        let blocks = generators
            .iter()
            .map(|generator| {
                self.render_generator(package, generator)
                    .map(|block| format!("{block}\n"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(format!("{header}\n{}", blocks.join("\n")))
    }
}

/// `$default` wins over `default`; JSON falsy values count as absent
fn default_label(property: &Property) -> String {
    [&property.smart_default, &property.default]
        .into_iter()
        .flatten()
        .find(|value| is_truthy(value))
        .map(|value| integral_numbers(value).to_string())
        .unwrap_or_else(|| "none".to_string())
}

/// Largest integer a JavaScript number holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// `1.0` prints as `1`, the way JavaScript serializes numbers
fn integral_numbers(value: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match value {
        Value::Number(number) if number.is_f64() => number
            .as_f64()
            .filter(|n| n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER)
            .map(|n| Value::from(n as i64))
            .unwrap_or_else(|| value.clone()),
        Value::Array(items) => Value::Array(items.iter().map(integral_numbers).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), integral_numbers(field)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(text) => !text.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

fn dependency_row(name: &str, version: &str) -> DependencyRow {
    let npm_url = encode_url(format!("https://www.npmjs.com/package/{name}"));
    DependencyRow {
        name: name.to_string(),
        used_badge: encode_url(format!(
            "https://img.shields.io/badge/npm_package-{}-9cf.svg",
            badge_version(version)
        )),
        current_badge: encode_url(format!("https://badge.fury.io/js/{name}.svg")),
        npm_url,
    }
}

/// Version range stripped of comparison operators and escaped for a shields.io path
pub fn badge_version(version: &str) -> String {
    version
        .chars()
        .filter(|c| !matches!(c, '=' | '<' | '>' | '~' | '^'))
        .collect::<String>()
        .trim()
        .replace('-', "--")
        .replace('_', "__")
        .replace(' ', "_")
}

fn encode_url(raw: String) -> String {
    Url::parse(&raw).map(|url| url.to_string()).unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::SchematicSchema;
    use serde_json::json;
    use std::path::Path;

    fn package() -> PackageManifest {
        PackageManifest {
            name: "my-schematics".to_string(),
            ..Default::default()
        }
    }

    fn generator(value: serde_json::Value) -> Generator {
        let schema: SchematicSchema = serde_json::from_value(value).unwrap();
        let id = schema.id.clone().unwrap();
        Generator::from_schema(
            Path::new("/p/src"),
            &Path::new("/p/src").join(id).join("schema.json"),
            schema,
        )
        .unwrap()
    }

    #[test]
    fn test_render_minimal_generator() {
        let renderer = MarkdownRenderer::new("schematics").unwrap();
        let output = renderer
            .render_generator(&package(), &generator(json!({ "id": "service" })))
            .unwrap();

        assert_eq!(
            output,
            "## service\n\n\nExample:\n```bash\nschematics my-schematics:service\n```\n\n\n"
        );
    }

    #[test]
    fn test_render_generator_with_everything() {
        let renderer = MarkdownRenderer::new("schematics").unwrap();
        let output = renderer
            .render_generator(
                &package(),
                &generator(json!({
                    "id": "component",
                    "title": "Component",
                    "description": "Creates a component",
                    "examples": ["component --name=hero", "component --name=villain"],
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Component name",
                            "$default": { "$source": "argv", "index": 0 }
                        },
                        "flat": { "type": "boolean", "description": "Flat layout", "default": false },
                        "prefix": { "type": "string", "description": "Selector prefix", "default": "app" }
                    },
                    "required": ["name"],
                    "dependencies": { "@angular/core": "^17.0.0" },
                    "devDependencies": { "typescript": "~5.4.0", "jest": ">=29.0.0" }
                })),
            )
            .unwrap();

        let expected = "## Component\n\
Creates a component\n\
\n\
Examples:\n\
```bash\n\
schematics my-schematics:component --name=hero\n\
schematics my-schematics:component --name=villain\n\
```\n\
\n\
### Parameters\n\
| Name | Type | Description | Default |\n\
|------|:----:|------------:|--------:|\n\
| name | *required* {string} | Component name | {\"$source\":\"argv\",\"index\":0} |\n\
| flat | {boolean} | Flat layout | none |\n\
| prefix | {string} | Selector prefix | \"app\" |\n\
\n\
### Dependencies\n\
| Name | Used | Current |\n\
| ------ | ------ | ------ |\n\
| [@angular/core](https://www.npmjs.com/package/@angular/core) | [![NPM version](https://img.shields.io/badge/npm_package-17.0.0-9cf.svg)](https://www.npmjs.com/package/@angular/core) | [![NPM version](https://badge.fury.io/js/@angular/core.svg)](https://www.npmjs.com/package/@angular/core) |\n\
\n\
### Dev dependencies\n\
| Name | Used | Current |\n\
| ------ | ------ | ------ |\n\
| [typescript](https://www.npmjs.com/package/typescript) | [![NPM version](https://img.shields.io/badge/npm_package-5.4.0-9cf.svg)](https://www.npmjs.com/package/typescript) | [![NPM version](https://badge.fury.io/js/typescript.svg)](https://www.npmjs.com/package/typescript) |\n\
| [jest](https://www.npmjs.com/package/jest) | [![NPM version](https://img.shields.io/badge/npm_package-29.0.0-9cf.svg)](https://www.npmjs.com/package/jest) | [![NPM version](https://badge.fury.io/js/jest.svg)](https://www.npmjs.com/package/jest) |";

        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_dev_dependencies_only() {
        let renderer = MarkdownRenderer::new("schematics").unwrap();
        let output = renderer
            .render_generator(
                &package(),
                &generator(json!({
                    "id": "lint",
                    "devDependencies": { "eslint": "8.0.0" }
                })),
            )
            .unwrap();

        assert!(output.contains("```\n\n\n\n### Dev dependencies\n"));
        assert!(!output.contains("### Dependencies"));
        assert!(!output.contains("### Parameters"));
    }

    #[test]
    fn test_render_header() {
        let renderer = MarkdownRenderer::new("schematics").unwrap();
        let generators = vec![
            generator(json!({ "id": "app", "title": "App Shell", "description": "Creates the shell" })),
            generator(json!({ "id": "lib-module" })),
        ];

        let output = renderer.render_header(&package(), &generators).unwrap();

        assert_eq!(
            output,
            "\n* [Install](#installation)\n\
* [Usage](#usage)\n\
* [Available generators](#available-generators)\n\
\n\
# Installation\n\
```bash\n\
npm install -g @angular-devkit/schematics-cli\n\
npm install --save-dev my-schematics\n\
```\n\
\n\
# Usage\n\
```bash\n\
schematics my-schematics:<generator name> <arguments>\n\
```\n\
\n\
# Available generators\n\
* [App Shell](#app-shell) - Creates the shell\n\
* [lib module](#lib-module) - lib-module"
        );
    }

    #[test]
    fn test_render_section_joins_blocks() {
        let renderer = MarkdownRenderer::new("ng g").unwrap();
        let generators = vec![
            generator(json!({ "id": "a" })),
            generator(json!({ "id": "b" })),
        ];

        let section = renderer.render_section(&package(), &generators).unwrap();
        let header = renderer.render_header(&package(), &generators).unwrap();
        let a = renderer.render_generator(&package(), &generators[0]).unwrap();
        let b = renderer.render_generator(&package(), &generators[1]).unwrap();

        assert_eq!(section, format!("{header}\n{a}\n\n{b}\n"));
        assert!(section.contains("ng g my-schematics:a"));
    }

    #[test]
    fn test_render_section_without_generators() {
        let renderer = MarkdownRenderer::new("schematics").unwrap();
        let section = renderer.render_section(&package(), &[]).unwrap();
        assert!(section.ends_with("# Available generators\n\n"));
    }

    #[test]
    fn test_badge_version() {
        assert_eq!(badge_version("^1.2.3"), "1.2.3");
        assert_eq!(badge_version(">=2.0.0 <3.0.0"), "2.0.0_3.0.0");
        assert_eq!(badge_version("~1.0.0-beta.1"), "1.0.0--beta.1");
        assert_eq!(badge_version("1.0.0_rc"), "1.0.0__rc");
    }

    #[test]
    fn test_default_label_truthiness() {
        let property = Property {
            smart_default: Some(json!(0)),
            default: Some(json!(3)),
            ..Default::default()
        };
        assert_eq!(default_label(&property), "3");

        let property = Property {
            default: Some(json!("")),
            ..Default::default()
        };
        assert_eq!(default_label(&property), "none");

        let property = Property {
            default: Some(json!(["a", "b"])),
            ..Default::default()
        };
        assert_eq!(default_label(&property), "[\"a\",\"b\"]");
    }

    #[test]
    fn test_default_label_whole_floats() {
        let property = Property {
            default: Some(json!(1.0)),
            ..Default::default()
        };
        assert_eq!(default_label(&property), "1");

        let property = Property {
            default: Some(json!({ "ratio": 2.0, "scale": 1.5 })),
            ..Default::default()
        };
        assert_eq!(default_label(&property), "{\"ratio\":2,\"scale\":1.5}");
    }

    #[test]
    fn test_package_urls_are_percent_encoded() {
        let row = dependency_row("my pkg", "1.0.0");
        assert_eq!(row.npm_url, "https://www.npmjs.com/package/my%20pkg");
    }

    #[test]
    fn test_scoped_package_urls_keep_scope() {
        let row = dependency_row("@scope/pkg", "1.0.0");
        assert_eq!(row.npm_url, "https://www.npmjs.com/package/@scope/pkg");
        assert_eq!(row.current_badge, "https://badge.fury.io/js/@scope/pkg.svg");
    }
}
