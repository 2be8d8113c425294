//! `package.json` generator.

use indexmap::IndexMap;
use kiln_core::{FileRules, GeneratedFile};
use serde::Serialize;

use super::{MARKER, SynthInput, to_json};
use crate::targets::{Ecosystem, PublishTarget};

/// Build toolchain, added to `devDependencies` unless declared.
const TOOLCHAIN: &[(&str, &str)] = &[
    ("@types/jest", "^29"),
    ("jest", "^29"),
    ("jsii", "~5.4.0"),
    ("jsii-pacmak", "^1.102.0"),
    ("ts-jest", "^29"),
    ("typescript", "~5.4.0"),
];

const JSII_FLAGS: &str = "--silence-warnings=reserved-word";

/// The npm package manifest.
pub struct PackageJson<'a> {
    input: SynthInput<'a>,
}

impl<'a> PackageJson<'a> {
    pub fn new(input: SynthInput<'a>) -> Self {
        Self { input }
    }

    fn scripts(&self) -> IndexMap<String, String> {
        let mut scripts = IndexMap::new();
        let mut add = |name: &str, command: String| {
            scripts.insert(name.to_string(), command);
        };

        add("build", format!("jsii {}", JSII_FLAGS));
        add("watch", format!("jsii -w {}", JSII_FLAGS));
        add("test", "jest --passWithNoTests".to_string());
        add("synth", "kiln synth".to_string());

        let pacmak = self.input.pacmak_targets();
        for target in &pacmak {
            add(
                &format!("package:{}", target),
                format!("jsii-pacmak -v --target {}", target),
            );
        }
        add(
            "package-all",
            pacmak
                .iter()
                .map(|t| format!("npm run package:{}", t))
                .collect::<Vec<_>>()
                .join(" && "),
        );

        if self.input.descriptor.features.deps_upgrade {
            add(
                "upgrade",
                "npx npm-check-updates --upgrade --target=minor && npm install".to_string(),
            );
        }

        scripts
    }

    fn dev_dependencies(&self) -> IndexMap<String, String> {
        let deps = self.input.dependencies;
        let constraints = &self.input.descriptor.versions;
        let mut dev: IndexMap<String, String> = IndexMap::new();

        for spec in deps.dev() {
            dev.insert(spec.name.clone(), spec.range().to_string());
        }
        // Peers are installed locally for the build, pinned to the constraint.
        for spec in deps.peer() {
            let range = match constraints.get(&spec.name) {
                Some(version) => version.to_string(),
                None => spec.range().to_string(),
            };
            dev.insert(spec.name.clone(), range);
        }
        for (name, range) in TOOLCHAIN {
            if deps.get(name).is_none() {
                dev.entry(name.to_string()).or_insert_with(|| range.to_string());
            }
        }

        dev.sort_keys();
        dev
    }

    fn jsii(&self) -> Jsii {
        let mut targets = IndexMap::new();
        for target in self.input.targets {
            let entry = match target {
                PublishTarget::RegistryDefault { .. } => continue,
                PublishTarget::AlternateRegistry { module_name, .. } => JsiiTarget::Go {
                    module_name: module_name.clone(),
                },
                PublishTarget::AlternateEcosystem {
                    ecosystem: Ecosystem::NuGet,
                    dist_name,
                    module_name,
                } => JsiiTarget::DotNet {
                    namespace: module_name.clone(),
                    package_id: dist_name.clone(),
                },
                PublishTarget::AlternateEcosystem {
                    dist_name,
                    module_name,
                    ..
                } => JsiiTarget::Python {
                    dist_name: dist_name.clone(),
                    module: module_name.clone(),
                },
            };
            targets.insert(target.ecosystem().pacmak_target(), entry);
        }

        Jsii {
            outdir: "dist",
            version_format: "full",
            targets,
            tsc: Tsc {
                out_dir: "lib",
                root_dir: "src",
            },
        }
    }

    fn manifest(&self) -> Manifest<'a> {
        let descriptor = self.input.descriptor;
        let project = &descriptor.project;
        let deps = self.input.dependencies;

        let dependencies = deps
            .runtime()
            .map(|d| (d.name.clone(), d.range().to_string()))
            .collect();
        let peer_dependencies = deps
            .peer()
            .map(|d| (d.name.clone(), d.range().to_string()))
            .collect();
        let bundled_dependencies = deps.bundled().map(|d| d.name.clone()).collect();

        let publish_config = self.input.target(Ecosystem::Npm).and_then(|t| match t {
            PublishTarget::RegistryDefault { access, .. } => Some(PublishConfig {
                access: access.as_str(),
            }),
            _ => None,
        });

        Manifest {
            name: &project.name,
            description: &project.description,
            repository: Repository {
                kind: "git",
                url: project.repository_url.trim(),
            },
            scripts: self.scripts(),
            author: Author {
                name: &project.author,
                email: project.author_address.as_deref(),
                organization: false,
            },
            dev_dependencies: self.dev_dependencies(),
            peer_dependencies,
            dependencies,
            bundled_dependencies,
            keywords: &project.keywords,
            main: "lib/index.js",
            license: &project.license,
            publish_config,
            version: project.version.to_string(),
            types: "lib/index.d.ts",
            stability: "stable",
            jsii: self.jsii(),
            marker: MARKER,
        }
    }
}

impl GeneratedFile for PackageJson<'_> {
    fn path(&self) -> &str {
        "package.json"
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> eyre::Result<String> {
        to_json(&self.manifest())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    name: &'a str,
    description: &'a str,
    repository: Repository<'a>,
    scripts: IndexMap<String, String>,
    author: Author<'a>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    dev_dependencies: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    peer_dependencies: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    dependencies: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bundled_dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    keywords: &'a Vec<String>,
    main: &'static str,
    license: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    publish_config: Option<PublishConfig>,
    version: String,
    types: &'static str,
    stability: &'static str,
    jsii: Jsii,
    #[serde(rename = "//")]
    marker: &'static str,
}

#[derive(Serialize)]
struct Repository<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    url: &'a str,
}

#[derive(Serialize)]
struct Author<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    organization: bool,
}

#[derive(Serialize)]
struct PublishConfig {
    access: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Jsii {
    outdir: &'static str,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    targets: IndexMap<&'static str, JsiiTarget>,
    tsc: Tsc,
    version_format: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tsc {
    out_dir: &'static str,
    root_dir: &'static str,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsiiTarget {
    #[serde(rename_all = "camelCase")]
    Python { dist_name: String, module: String },
    #[serde(rename_all = "camelCase")]
    Go { module_name: String },
    #[serde(rename_all = "camelCase")]
    DotNet {
        namespace: String,
        package_id: String,
    },
}
