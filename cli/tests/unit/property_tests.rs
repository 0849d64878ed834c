//! Property tests for the pure domain helpers.

use proptest::prelude::*;
use zbx_provision::domain::config::RepositoryConfig;
use zbx_provision::domain::{ConfigVariant, Elevation, PackageState, parse_dpkg_list};

fn package_name() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9+.-]{1,20}"
}

proptest! {
    /// A listed package is found with its flags, and a longer name sharing
    /// its prefix never is.
    #[test]
    fn prop_dpkg_listing_matches_exact_names(name in package_name(), suffix in "[a-z0-9]{1,4}") {
        let listing = format!("ii  {name}:amd64  1.0  amd64  desc\n");
        prop_assert_eq!(parse_dpkg_list(&listing, &name), PackageState::Installed);
        let longer = format!("{name}{suffix}");
        prop_assert_eq!(parse_dpkg_list(&listing, &longer), PackageState::NotInstalled);
    }

    /// Wrapping keeps the original argv intact after the helper.
    #[test]
    fn prop_helper_wrap_preserves_argv(
        program in "[a-z-]{1,12}",
        args in prop::collection::vec("[a-zA-Z0-9=/._-]{1,16}", 0..6),
    ) {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let (direct, direct_argv) = Elevation::Direct.wrap(&program, &args);
        prop_assert_eq!(direct, program.as_str());
        prop_assert_eq!(&direct_argv, &args);

        let helper = Elevation::Helper("sudo".to_owned());
        let (wrapped, wrapped_argv) = helper.wrap(&program, &args);
        prop_assert_eq!(wrapped, "sudo");
        prop_assert_eq!(wrapped_argv[0], program.as_str());
        prop_assert_eq!(&wrapped_argv[1..], args.as_slice());
    }

    /// Rendered repository URLs keep no placeholder and end in the file name.
    #[test]
    fn prop_artifact_url_is_fully_rendered(version in "[0-9]{1,2}\\.[0-9]", release in "[0-9]{2}\\.[0-9]{2}") {
        let repo = RepositoryConfig { version: version.clone(), release, ..RepositoryConfig::default() };
        let url = repo.artifact_url();
        prop_assert!(!url.contains('{'), "unrendered placeholder in {}", url);
        prop_assert!(url.contains(&version));
        prop_assert!(url.ends_with(&repo.artifact_file_name()));
    }

    #[test]
    fn prop_variant_follows_probe(present in any::<bool>()) {
        let variant = ConfigVariant::select(present);
        prop_assert_eq!(variant == ConfigVariant::Gpu, present);
    }
}
