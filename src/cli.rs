//! CLI argument handling.

pub use crate::cli_args::{Cli, OutputFormat, StyleArg};

use crate::config::{ConfigOverrides, PickerOverrides};
use crate::style::StyleKind;

impl From<StyleArg> for StyleKind {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Checkbox => StyleKind::Checkbox,
            StyleArg::Chips => StyleKind::Chips,
            StyleArg::InlineList => StyleKind::InlineList,
            StyleArg::Menu => StyleKind::Menu,
        }
    }
}

impl Cli {
    /// Convert flat CLI args to the nested config shape for Figment merging.
    ///
    /// Only values given on the command line are set, so that a TOML file
    /// keeps every setting the command line leaves alone.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            picker: PickerOverrides {
                title: self.title.clone(),
                sources: (!self.sources.is_empty()).then(|| self.sources.clone()),
                selected: (!self.selected.is_empty()).then(|| self.selected.clone()),
                style: self.style.map(Into::into),
                width: self.width,
                expanded: self.expanded.then_some(true),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn unset_flags_produce_no_overrides() {
        let cli = Cli::parse_from(["multipicker", "--config", "picker.toml"]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides, ConfigOverrides::default());
    }

    #[test]
    fn comma_separated_sources_are_split() {
        let cli = Cli::parse_from([
            "multipicker",
            "--source",
            "apple,banana",
            "--source",
            "cherry",
            "--style",
            "inline-list",
            "--expanded",
        ]);
        let overrides = cli.to_config_overrides().picker;

        assert_eq!(
            overrides.sources,
            Some(vec!["apple".into(), "banana".into(), "cherry".into()])
        );
        assert_eq!(overrides.style, Some(StyleKind::InlineList));
        assert_eq!(overrides.expanded, Some(true));
        assert_eq!(overrides.selected, None);
    }

    #[test]
    fn sources_are_required_without_config() {
        assert!(Cli::try_parse_from(["multipicker"]).is_err());
    }
}
