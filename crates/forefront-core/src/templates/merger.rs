//! Merge the user's CSS/JS choices into the `package.json` scripts

use super::manifest::{Manifest, ManifestError};
use super::scripts::{dev_dependency_for, render, script_template};
use crate::workflow::{CssChoice, JsChoice};
use std::collections::HashSet;

/// Version written for every devDependency added by a choice
pub const DEV_DEPENDENCY_VERSION: &str = "latest";

/// Aggregate script that runs the chosen style compiler
pub const BUILD_STYLES: &str = "build:styles";

/// Aggregate script that runs the chosen script compiler
pub const BUILD_SCRIPTS: &str = "build:scripts";

/// Add the scripts (and devDependencies) required by the chosen flavors
///
/// Skipped categories leave the manifest untouched. CSS flavors never add a
/// devDependency: the SASS compiler is expected on the system.
pub fn merge_choices(
    manifest: &mut Manifest,
    css: CssChoice,
    js: JsChoice,
) -> Result<(), ManifestError> {
    let mut merge = Merge {
        manifest,
        written: HashSet::new(),
    };

    if let Some(flavor) = css.key() {
        merge.category(flavor, BUILD_STYLES)?;
    }

    if let Some(flavor) = js.key() {
        merge.category(flavor, BUILD_SCRIPTS)?;
        if let Some(dependency) = dev_dependency_for(flavor) {
            merge
                .manifest
                .set_dev_dependency(dependency, DEV_DEPENDENCY_VERSION)?;
        }
    }

    Ok(())
}

struct Merge<'a> {
    manifest: &'a mut Manifest,
    written: HashSet<String>,
}

impl Merge<'_> {
    fn category(&mut self, flavor: &str, aggregate: &str) -> Result<(), ManifestError> {
        let command = self.command(flavor, flavor)?;
        self.write(flavor, &command)?;

        let aggregate_command = self.command(aggregate, flavor)?;
        self.write(aggregate, &aggregate_command)
    }

    fn command(&self, name: &str, flavor: &str) -> Result<String, ManifestError> {
        script_template(name)
            .map(|template| render(template, flavor))
            .ok_or_else(|| ManifestError::UnknownScript {
                name: name.to_string(),
            })
    }

    fn write(&mut self, name: &str, command: &str) -> Result<(), ManifestError> {
        if !self.written.insert(name.to_string()) {
            return Err(ManifestError::ScriptRewritten {
                name: name.to_string(),
            });
        }
        self.manifest.set_script(name, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> Manifest {
        Manifest::from_json(
            r#"{
                "name": "",
                "scripts": {
                    "autoprefixer": "autoprefixer assets/css/*.css",
                    "build": "npm run build:styles && npm run build:scripts"
                },
                "devDependencies": { "watch": "latest" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_sass_and_es6() {
        let mut manifest = template();
        merge_choices(&mut manifest, CssChoice::Sass, JsChoice::Es6).unwrap();

        assert!(manifest.script("sass").is_some());
        assert!(manifest.script("es6").is_some());
        assert!(manifest.script(BUILD_STYLES).unwrap().contains("sass"));
        assert!(manifest.script(BUILD_SCRIPTS).unwrap().contains("es6"));
        assert_eq!(manifest.dev_dependency("babel"), Some("latest"));
    }

    #[test]
    fn test_js_skip_adds_nothing() {
        let mut manifest = template();
        merge_choices(&mut manifest, CssChoice::Sass, JsChoice::Skip).unwrap();

        assert_eq!(manifest.dev_dependency_names(), vec!["watch"]);
        for flavor in ["es6", "js", "coffeescript", BUILD_SCRIPTS] {
            assert!(manifest.script(flavor).is_none(), "unexpected {}", flavor);
        }
    }

    #[test]
    fn test_both_skipped_is_noop() {
        let mut manifest = template();
        merge_choices(&mut manifest, CssChoice::Skip, JsChoice::Skip).unwrap();

        assert_eq!(manifest, template());
    }

    #[test]
    fn test_css_never_adds_dependency() {
        let mut manifest = template();
        merge_choices(&mut manifest, CssChoice::Sass, JsChoice::Js).unwrap();

        assert_eq!(manifest.dev_dependency_names(), vec!["watch"]);
        assert_eq!(manifest.script(BUILD_SCRIPTS), Some("npm run js"));
    }

    #[test]
    fn test_coffeescript_dependency() {
        let mut manifest = template();
        merge_choices(&mut manifest, CssChoice::Skip, JsChoice::CoffeeScript).unwrap();

        assert_eq!(manifest.dev_dependency("coffee-script"), Some("latest"));
        assert!(manifest.script(BUILD_STYLES).is_none());
    }

    #[test]
    fn test_keys_only_added() {
        let before = template();
        let mut manifest = before.clone();
        merge_choices(&mut manifest, CssChoice::Sass, JsChoice::CoffeeScript).unwrap();

        for name in before.script_names() {
            assert!(manifest.script(name).is_some());
        }
        for name in before.dev_dependency_names() {
            assert!(manifest.dev_dependency(name).is_some());
        }
    }

    #[test]
    fn test_malformed_template() {
        let mut manifest = Manifest::from_json(r#"{ "scripts": {} }"#).unwrap();

        let err = merge_choices(&mut manifest, CssChoice::Skip, JsChoice::Es6).unwrap_err();
        assert!(matches!(err, ManifestError::MissingSection { .. }));
    }
}
