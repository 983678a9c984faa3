use crate::git::{self, SlugError};
use std::{collections::HashMap, fs, path::Path};
use thiserror::Error;

/// Options for building and publishing a release page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// alpha, beta, rc or official
    release_type: String,
    /// files uploaded as assets of the release
    asset_files: Vec<String>,
    /// the release whose page gets edited
    tag: String,
    name: String,
    /// organization owning the repository
    owner: String,
    /// repository where the page is published, the tag must already exist there
    repo: String,
    /// use production remote locations instead of mock mode
    no_mock: bool,
    draft: bool,
    /// an existing release page is only overwritten when this is set
    update_if_release_exists: bool,
    /// raw template text, empty means the default template
    page_template: String,
    release_notes_file: String,
    /// extra template values on top of the calculated ones
    substitutions: HashMap<String, String>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot update github page without a tag")]
    MissingTag,
    #[error("cannot update github page, repository not defined")]
    MissingRepository,
    #[error("cannot update github page, github organization not defined")]
    MissingOrganization,
    #[error("substitution value not well formed: {raw}")]
    MalformedSubstitution { raw: String },
    #[error("parsing repository slug")]
    ParseRepositorySlug {
        #[source]
        cause: SlugError,
    },
    #[error("reading page template text")]
    ReadTemplate {
        #[source]
        cause: std::io::Error,
    },
}

impl Options {
    pub fn new() -> Self {
        Options::default()
    }

    pub fn with_release_type(mut self, release_type: impl Into<String>) -> Self {
        self.release_type = release_type.into();
        self
    }

    pub fn with_asset_files(mut self, asset_files: Vec<String>) -> Self {
        self.asset_files = asset_files;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = repo.into();
        self
    }

    pub fn with_no_mock(mut self, no_mock: bool) -> Self {
        self.no_mock = no_mock;
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_update_if_release_exists(mut self, update_if_release_exists: bool) -> Self {
        self.update_if_release_exists = update_if_release_exists;
        self
    }

    pub fn with_page_template(mut self, page_template: impl Into<String>) -> Self {
        self.page_template = page_template.into();
        self
    }

    pub fn with_release_notes_file(mut self, release_notes_file: impl Into<String>) -> Self {
        self.release_notes_file = release_notes_file.into();
        self
    }

    pub fn with_substitutions(mut self, substitutions: HashMap<String, String>) -> Self {
        self.substitutions = substitutions;
        self
    }

    pub fn release_type(&self) -> &str {
        &self.release_type
    }

    pub fn asset_files(&self) -> &[String] {
        &self.asset_files
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn no_mock(&self) -> bool {
        self.no_mock
    }

    pub fn draft(&self) -> bool {
        self.draft
    }

    pub fn update_if_release_exists(&self) -> bool {
        self.update_if_release_exists
    }

    pub fn page_template(&self) -> &str {
        &self.page_template
    }

    pub fn release_notes_file(&self) -> &str {
        &self.release_notes_file
    }

    pub fn substitutions(&self) -> &HashMap<String, String> {
        &self.substitutions
    }

    /// Checks the fields the release page cannot be published without.
    ///
    /// The tag is checked first, then the repository and then the owner, so
    /// only the first missing field is reported.
    pub fn validate(&self) -> Result<(), Error> {
        if self.tag.is_empty() {
            return Err(Error::MissingTag);
        }
        if self.repo.is_empty() {
            return Err(Error::MissingRepository);
        }
        if self.owner.is_empty() {
            return Err(Error::MissingOrganization);
        }

        Ok(())
    }

    /// Parses `key:value` strings into the template substitutions, replacing
    /// any previous ones. Only the first `:` splits, so values may contain
    /// colons.
    ///
    /// Entries parsed before a malformed one are kept.
    pub fn parse_substitutions<S: AsRef<str>>(&mut self, subs: &[S]) -> Result<(), Error> {
        self.substitutions = HashMap::new();

        for sub in subs {
            let sub = sub.as_ref();
            match sub.split_once(':') {
                Some((key, value)) if !key.is_empty() => {
                    self.substitutions.insert(key.to_owned(), value.to_owned());
                }
                _ => {
                    return Err(Error::MalformedSubstitution {
                        raw: sub.to_owned(),
                    })
                }
            }
        }

        Ok(())
    }

    /// Sets owner and repo from an `org/repo` slug.
    pub fn set_repository(&mut self, repo_slug: &str) -> Result<(), Error> {
        let (owner, repo) = git::parse_repo_slug(repo_slug)
            .map_err(|cause| Error::ParseRepositorySlug { cause })?;

        self.owner = owner;
        self.repo = repo;

        Ok(())
    }

    /// Loads a custom page template from `template_path`. An empty path
    /// clears the template so the default one gets used.
    pub fn read_template(&mut self, template_path: impl AsRef<Path>) -> Result<(), Error> {
        let template_path = template_path.as_ref();

        if template_path.as_os_str().is_empty() {
            self.page_template = String::new();
            return Ok(());
        }

        let template =
            fs::read_to_string(template_path).map_err(|cause| Error::ReadTemplate { cause })?;

        log::info!("Using custom template from {}", template_path.display());
        self.page_template = template;

        Ok(())
    }
}
