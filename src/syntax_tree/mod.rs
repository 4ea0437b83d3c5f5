use {
    anyhow::{Context as _, Result},
    std::{
        error::Error,
        fmt::{Debug, Display},
        fs::read_to_string,
        io::{stdin, Read as _},
        path::Path,
        str::FromStr,
    },
};

pub mod fol;
pub mod xml;

pub trait Node: Clone + Debug + Eq + PartialEq + FromStr + Display {
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        <Self as FromStr>::Err: Error + Send + Sync + 'static,
    {
        let path = path.as_ref();
        let content = read_to_string(path)
            .with_context(|| format!("could not read file `{}`", path.display()))?;
        content
            .parse()
            .with_context(|| format!("could not parse file `{}`", path.display()))
    }

    fn from_stdin() -> Result<Self>
    where
        <Self as FromStr>::Err: Error + Send + Sync + 'static,
    {
        let mut content = String::new();
        stdin()
            .read_to_string(&mut content)
            .context("could not read from stdin")?;
        content.parse().context("could not parse stdin")
    }
}

macro_rules! impl_node {
    ($node:ty, $format:expr, $parser:ty) => {
        impl Node for $node {}

        impl std::fmt::Display for $node {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $format(self))
            }
        }

        impl std::str::FromStr for $node {
            type Err = <$parser as crate::parsing::Parser>::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$parser as crate::parsing::Parser>::parse(s)
            }
        }
    };
}

pub(crate) use impl_node;
