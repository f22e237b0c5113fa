use crate::utils::{PackwiseError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// When a rule's loaders run relative to ordinary rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    Pre,
    Post,
}

/// A loader reference, either by bare name or with options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderUse {
    Name(String),
    WithOptions { loader: String, options: Value },
}

impl LoaderUse {
    pub fn name(name: impl Into<String>) -> Self {
        LoaderUse::Name(name.into())
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        LoaderUse::WithOptions {
            loader: loader.into(),
            options,
        }
    }

    pub fn loader(&self) -> &str {
        match self {
            LoaderUse::Name(name) => name,
            LoaderUse::WithOptions { loader, .. } => loader,
        }
    }

    pub fn options(&self) -> Option<&Value> {
        match self {
            LoaderUse::Name(_) => None,
            LoaderUse::WithOptions { options, .. } => Some(options),
        }
    }
}

/// Module rule: a path pattern plus the loaders applied to matching modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderRule {
    pub test: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,
    #[serde(rename = "use")]
    pub uses: Vec<LoaderUse>,
}

impl LoaderRule {
    pub fn new(test: impl Into<String>, uses: Vec<LoaderUse>) -> Self {
        Self {
            test: test.into(),
            exclude: None,
            enforce: None,
            uses,
        }
    }

    pub fn excluding(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    pub fn enforced(mut self, enforce: Enforce) -> Self {
        self.enforce = Some(enforce);
        self
    }
}

#[derive(Debug)]
struct CompiledRule<'a> {
    rule: &'a LoaderRule,
    test: Regex,
    exclude: Option<Regex>,
}

impl CompiledRule<'_> {
    fn matches(&self, path: &str) -> bool {
        self.test.is_match(path)
            && !self.exclude.as_ref().is_some_and(|exclude| exclude.is_match(path))
    }
}

/// Rule list with every pattern compiled, ready for matching.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    rules: Vec<CompiledRule<'a>>,
}

pub struct RuleSet;

impl RuleSet {
    pub fn compile(rules: &[LoaderRule]) -> Result<CompiledRules<'_>> {
        let rules = rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    rule,
                    test: compile_pattern(&rule.test)?,
                    exclude: rule.exclude.as_deref().map(compile_pattern).transpose()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledRules { rules })
    }
}

impl<'a> CompiledRules<'a> {
    /// Rules whose pattern accepts `path`, in declaration order.
    pub fn matching(&self, path: &str) -> Vec<&'a LoaderRule> {
        let path = normalize(path);
        self.rules
            .iter()
            .filter(|compiled| compiled.matches(&path))
            .map(|compiled| compiled.rule)
            .collect()
    }

    /// Loaders applied to `path`, in the order they run.
    ///
    /// The chain is composed as post, normal, then pre rules, each rule's
    /// `use` list kept as declared; loaders then run from the end of that
    /// chain to its start.
    pub fn loaders_for(&self, path: &str) -> Vec<&'a LoaderUse> {
        let matched = self.matching(path);
        let mut chain: Vec<&'a LoaderUse> = Vec::new();

        for phase in [Some(Enforce::Post), None, Some(Enforce::Pre)] {
            for &rule in &matched {
                if rule.enforce == phase {
                    chain.extend(rule.uses.iter());
                }
            }
        }

        chain.reverse();
        chain
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| PackwiseError::InvalidRule {
        pattern: pattern.to_string(),
        source,
    })
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}
