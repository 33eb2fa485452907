//!
//! The benchmark configuration.
//!

use std::path::PathBuf;

///
/// The block appended to every file during the modification step.
///
pub const EXTRA_CONTENT: &str = r#"
.^)>=................     .   . ..    .......=^)]^
~{####<-.............       .      .   ...*}%#{{{#
:{{[[#%@}~...........      .   .     ...(@@%%{[]}#
.>{[}}{%@@#-..........               .(%%%#})>()}}
.:}]))(]{%%%#*...... .  .          .>%##{}]<*+^({*
..){])]}{#%@%%{#[-........     ..>{{%@@{{}](<<)[}.
..-{}[[}{##%@@}#%%[>**=:..-*>^+[%@%%@@%##}]((}{%>.
...<}}}{#%@@@@%@@%%}}[[())]}{#%%%@@@@%%%##{[(]}#:.
...-{}{%%%@@@@@@%%%#{{{#}[{###%%%@%@%@%%{{[[[[{^..
...-}}[}%%%@@@%%#{#%%%%%%%%%@%%%%%%#%@@%#{#}[}[~..
...^{[]#%%%%####%%%%@@@@@@@@@@@@@%##{{#%%###[[}:..
+==)@@{}#%%#][##%%@@@@@@@@@@@@@@%##{{#}[{{{}}##:..
+^<}@@@#}{[<>]}{##%@@@@@@@@@@@@%#####}((([]#%@)...
<]}#%@#}]<]<^)}##%%@@@@@@@@@@@@%%@%%{[)^())#%%}:..
]{{##{()]}}(]}#%@@@@@@@@@@@@@@@@@@@%%{}((}[]}%#*..
}{###[}}{#%{(}{#}%{@@@@@@@@@@@@@}%#][{^}#%#{}}#-..
######{(]{%#(>{{{)<#%@@@@@@@@@%{<]}}}*)}{]([###-..
#%#%%%#}{%%@#]<<>]{##@@@@%%@@@%{#}](]}##{}([#%{:..
@%%%%%%##%%@@%%%%#%%%@@%}}}#%@@%%%%%%%%{}{{{%%]...
@@@%%%%%%%%@@@%@%%%@@@@[>^><#@@}}#%%##%%%%%#%#+...
@@@%%%%%%%%%%%%%%#%####)>^^*(}[]](]}}{%%%#%%#>....
@@@@@%%%%%%%%%@%%#%%##}}}}}}{[}#{}##%%%%#%%#+.....
@@@@@@@@@%%%%%%##%%@%#%@%##%@%{%%%%%@@%%%%#>......
@@@@@@@@@@@@@#%%@@@@@%%%####%%%@@@@@%##%%#+.......
@@@@@@@@@@@@%%##%%@@@@%%{#%{%%%%@@@{%%%%%~........
@@@@@@@@@@@@@@@%%#######{](}#%#####%#}#%=.........
@@@@@@@@@@@@@@@@@@@@%%%%%##%#%%%%@@%#>-...........
@@@@@@@@@@@@@@@@@@@@@@@%%%%%%%@@@@%%#=............
@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@%%%~............
"#;

///
/// The benchmark configuration.
///
/// The inputs are not read from the command line or the environment.
///
#[derive(Debug, Clone)]
pub struct Config {
    /// The reference zip archive extracted at the beginning of every trial.
    pub reference_archive_path: PathBuf,
    /// The scratch directory owned by the running trial.
    pub working_directory: PathBuf,
    /// The number of timed trials after the warm-up one.
    pub trial_count: usize,
    /// The block appended to every file of the extracted tree.
    pub extra_content: String,
    /// The message of the commit made right after extraction.
    pub initial_commit_message: String,
    /// The message of the commit made after the modification.
    pub second_commit_message: String,
}

impl Config {
    /// The default reference archive path.
    pub const DEFAULT_REFERENCE_ARCHIVE_PATH: &'static str = "./react-19.1.1.zip";

    /// The default working directory.
    pub const DEFAULT_WORKING_DIRECTORY: &'static str = "testrun";

    /// The default number of timed trials.
    pub const DEFAULT_TRIAL_COUNT: usize = 10;

    /// The default initial commit message.
    pub const DEFAULT_INITIAL_COMMIT_MESSAGE: &'static str = "initial commit";

    /// The default second commit message.
    pub const DEFAULT_SECOND_COMMIT_MESSAGE: &'static str = "cats!";
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_archive_path: PathBuf::from(Self::DEFAULT_REFERENCE_ARCHIVE_PATH),
            working_directory: PathBuf::from(Self::DEFAULT_WORKING_DIRECTORY),
            trial_count: Self::DEFAULT_TRIAL_COUNT,
            extra_content: EXTRA_CONTENT.to_owned(),
            initial_commit_message: Self::DEFAULT_INITIAL_COMMIT_MESSAGE.to_owned(),
            second_commit_message: Self::DEFAULT_SECOND_COMMIT_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn default() {
        let config = Config::default();

        assert_eq!(config.trial_count, 10);
        assert_eq!(config.working_directory.to_str(), Some("testrun"));
        assert!(config.extra_content.starts_with('\n'));
        assert!(config.extra_content.ends_with("%%%~............\n"));
        assert_eq!(config.extra_content.lines().count(), 30);
    }
}
