use colored::Colorize;

use crate::{Sample, DecisionTree, DecisionTreeClassifier};
use super::loss_functions::zero_one_loss;

use std::fmt;
use std::time::Instant;

const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Training and test error of a classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Zero-one loss on the training sample.
    pub train_error: f64,
    /// Zero-one loss on the test sample.
    pub test_error: f64,
}


impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error(train): {}", self.train_error)?;
        write!(f, "error(test): {}", self.test_error)
    }
}


/// Struct `Logger` grows a decision tree on the training sample
/// and measures the running time
/// and the train/test error of the resulting classifier.
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
/// use minitree::research::Logger;
///
/// let train = SampleReader::new().file("train.csv").read().unwrap();
/// let test = SampleReader::new().file("test.csv").read().unwrap();
///
/// let tree = DecisionTreeBuilder::new(&train).build();
/// let (f, report) = Logger::new(&tree, &train, &test)
///     .verbose(true)
///     .run();
/// println!("{report}");
/// ```
pub struct Logger<'a> {
    tree: &'a DecisionTree,
    train: &'a Sample,
    test: &'a Sample,
    verbose: bool,
}


impl<'a> Logger<'a> {
    /// Create a new instance of `Logger`.
    pub fn new(
        tree: &'a DecisionTree,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self { tree, train, test, verbose: false, }
    }


    /// Print the settings and the running time to stdout.
    /// Default is `false`.
    #[inline(always)]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Learner".bold(),
            self.tree.name().bold().green(),
        );

        let line = self.tree.info()
            .into_iter()
            .map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        println!("{line}");

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "# of train instances".bold(),
            self.train.shape().0.to_string().bold().green(),
            "# of test instances".bold(),
            self.test.shape().0.to_string().bold().green(),
            "".bold(),
        );
    }


    /// Grow the tree on the training sample
    /// and evaluate it on both samples.
    pub fn run(&self) -> (DecisionTreeClassifier, Report) {
        if self.verbose { self.print_stats(); }

        let now = Instant::now();
        let f = self.tree.produce(self.train);
        let time = now.elapsed().as_millis();

        let train_error = zero_one_loss(self.train, &f);
        let test_error = zero_one_loss(self.test, &f);

        if self.verbose {
            println!(
                "{} {}\t{}\t{}\t{}\n",
                "[FIN]".bold().bright_green(),
                format!("depth {}", f.root().depth()).red(),
                format!("train {train_error:.5}").bold().green(),
                format!("test {test_error:.5}").bold().yellow(),
                time_format(time).bold().cyan(),
            );
        }

        let report = Report { train_error, test_error };
        (f, report)
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    format!(" {:0>2}m {:0>2}s", min, sec)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(1_500), " 01.500s");
        assert_eq!(time_format(61_000), " 01m 01s");
    }

    #[test]
    fn test_report_display() {
        let report = Report { train_error: 0.25, test_error: 0.5 };
        assert_eq!(
            format!("{report}"),
            "error(train): 0.25\nerror(test): 0.5"
        );
    }
}
