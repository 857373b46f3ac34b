//! npm script and devDependency templates
//!
//! These are the entries merged into `package.json` according to the user's choices.
//! The scripts every project gets live in the template pack's own `package.json`.

/// Placeholder replaced by the chosen flavor in aggregate scripts
pub const PLACEHOLDER: &str = "%s";

/// Script name -> command template
pub const SCRIPT_TEMPLATES: &[(&str, &str)] = &[
    // Autoprefix CSS
    ("autoprefixer", "autoprefixer assets/css/*.css"),
    (
        "coffeescript",
        "cat src/coffeescript/*.coffee | coffee -cs > assets/js/application.js",
    ),
    ("es6", "babel src/es6 --out-file assets/js/application.js"),
    ("js", "cat src/js/*.js > assets/js/application.js"),
    ("sass", "sass src/scss/application.scss assets/css/application.css"),
    // Run the chosen style compiler, then autoprefixer
    ("build:styles", "npm run %s && npm run autoprefixer"),
    ("build:scripts", "npm run %s"),
    ("build", "npm run build:styles && npm run build:scripts"),
    ("watch", "watch 'npm run build' src"),
    (
        "serve",
        "browser-sync start --server --files \"assets/css/*.css, assets/js/*.js\"",
    ),
    ("test", ""),
    ("develop", "npm run build && npm run watch && npm run serve"),
];

/// Flavor -> devDependency it needs
pub const DEV_DEPENDENCY_TEMPLATES: &[(&str, &str)] =
    &[("coffeescript", "coffee-script"), ("es6", "babel")];

/// Look up a script command template by name
pub fn script_template(name: &str) -> Option<&'static str> {
    SCRIPT_TEMPLATES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, template)| *template)
}

/// Look up the devDependency a flavor requires, if any
pub fn dev_dependency_for(flavor: &str) -> Option<&'static str> {
    DEV_DEPENDENCY_TEMPLATES
        .iter()
        .find(|(key, _)| *key == flavor)
        .map(|(_, dep)| *dep)
}

/// Substitute the first placeholder in `template` with `value`
///
/// Templates without a placeholder come back unchanged.
pub fn render(template: &str, value: &str) -> String {
    template.replacen(PLACEHOLDER, value, 1)
}
