use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use super::sample_struct::{Sample, Instance};
use super::token::PositiveTokens;
use crate::common::checker;
use crate::SampleError;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a comma-separated file
/// of categorical tokens to [`Sample`].
/// The first line must be the header
/// and the last column must be the class.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minitree::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    tokens: PositiveTokens,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            tokens: PositiveTokens::default(),
        }
    }


    /// Set the tokens that are mapped to `1`.
    /// Default is [`DEFAULT_POSITIVE_TOKENS`](super::DEFAULT_POSITIVE_TOKENS).
    pub fn positive_tokens<I, S>(mut self, tokens: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        self.tokens = PositiveTokens::new(tokens);
        self
    }


    /// Parse the records from `reader`.
    pub fn read_from<R>(&self, reader: R) -> Result<Sample, SampleError>
        where R: BufRead
    {
        let mut lines = reader.lines()
            .enumerate()
            .map(|(i, line)| line.map(|l| (i + 1, l)))
            .filter(|line| {
                line.as_ref().map_or(true, |(_, l)| !l.trim().is_empty())
            });

        let (_, header) = lines.next()
            .ok_or(SampleError::MissingHeader)??;
        let mut attributes = split_fields(&header)
            .collect::<Vec<_>>();
        checker::check_header(&attributes)?;
        let n_column = attributes.len();

        let mut instances = Vec::new();
        for line in lines {
            let (number, line) = line?;
            let values = split_fields(&line)
                .map(|token| self.tokens.map(&token))
                .collect::<Vec<_>>();
            checker::check_width(n_column, values.len(), number)?;

            instances.push(Instance::from_row(values));
        }

        let target = attributes.pop()
            .ok_or(SampleError::TooFewColumns(0))?;

        Ok(Sample { attributes, target, instances })
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `Result<Sample, SampleError>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample, SampleError> {
        let file = match self.file {
            Some(ref file) => File::open(file)?,
            None => panic!("The file name is not set. Use `SampleReader::file`."),
        };
        self.read_from(BufReader::new(file))
    }
}


/// Split a record by `,`.
/// White spaces inside a field are dropped.
fn split_fields(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(',')
        .map(|field| field.split_whitespace().collect::<String>())
}


#[cfg(test)]
mod tests {
    use super::*;

    const VOTES: &str = "\
        Anti_satellite_test_ban,Export_south_africa,party\n\
        y,n,democrat\n\
        n,y,republican\n\
        \n\
        y, y ,democrat\n";

    #[test]
    fn test_read_from_01() {
        let sample = SampleReader::<&str>::new()
            .read_from(VOTES.as_bytes())
            .unwrap();

        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.target_name(), "party");
        assert_eq!(
            sample.attribute_names(),
            &["Anti_satellite_test_ban", "Export_south_africa"]
        );
        assert_eq!(sample[0].as_slice(), &[1, 0, 1]);
        assert_eq!(sample[1].as_slice(), &[0, 1, 0]);
        assert_eq!(sample[2].as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn test_read_from_ragged() {
        let data = "a,b,class\ny,n,yes\ny,yes\n";
        let res = SampleReader::<&str>::new().read_from(data.as_bytes());
        assert!(
            matches!(
                res,
                Err(SampleError::RaggedRow { line: 3, expected: 3, found: 2 })
            ),
            "expected a ragged row error, got {res:?}."
        );
    }

    #[test]
    fn test_read_from_empty() {
        let res = SampleReader::<&str>::new().read_from("".as_bytes());
        assert!(matches!(res, Err(SampleError::MissingHeader)));
    }

    #[test]
    fn test_read_from_header_only() {
        let sample = SampleReader::<&str>::new()
            .read_from("a,b,class\n".as_bytes())
            .unwrap();
        assert_eq!(sample.shape(), (0, 2));
        assert!(sample.is_empty());
        assert_eq!(sample.target_name(), "class");
    }

    #[test]
    fn test_read_from_custom_tokens() {
        let data = "a,class\nspam,ham\nham,spam\n";
        let sample = SampleReader::<&str>::new()
            .positive_tokens(["spam"])
            .read_from(data.as_bytes())
            .unwrap();
        assert_eq!(sample.target(), vec![0, 1]);
        assert!(sample[0].value(0));
    }
}
