use graphwalk::search::SearchEngineName;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{multispace0, multispace1},
    combinator::{all_consuming, eof, map, map_opt, peek},
    sequence::{delimited, preceded, terminated},
    IResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Help,
    Hint,
    Progress,
    Restart,
    Show,
    Engine(SearchEngineName),
    Visit(String),
}

impl ReplCommand {
    pub fn parse(input: &str) -> Option<Self> {
        all_consuming(delimited(
            multispace0,
            alt((
                Self::parse_exit,
                Self::parse_help,
                Self::parse_hint,
                Self::parse_progress,
                Self::parse_restart,
                Self::parse_show,
                Self::parse_engine,
                Self::parse_visit,
            )),
            multispace0,
        ))(input)
        .ok()
        .map(|(_, cmd)| cmd)
    }

    fn parse_exit(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = alt((keyword("exit"), keyword("quit")))(input)?;
        Ok((input, ReplCommand::Exit))
    }

    fn parse_help(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = keyword("help")(input)?;
        Ok((input, ReplCommand::Help))
    }

    fn parse_hint(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = keyword("hint")(input)?;
        Ok((input, ReplCommand::Hint))
    }

    fn parse_progress(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = keyword("progress")(input)?;
        Ok((input, ReplCommand::Progress))
    }

    fn parse_restart(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = keyword("restart")(input)?;
        Ok((input, ReplCommand::Restart))
    }

    fn parse_show(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = keyword("show")(input)?;
        Ok((input, ReplCommand::Show))
    }

    fn parse_engine(input: &str) -> IResult<&str, ReplCommand> {
        preceded(
            preceded(tag("engine"), multispace1),
            map_opt(node_name, |name| {
                <SearchEngineName as clap::ValueEnum>::from_str(name, true)
                    .ok()
                    .map(ReplCommand::Engine)
            }),
        )(input)
    }

    /// `visit <node>`, or just the node name on its own.
    fn parse_visit(input: &str) -> IResult<&str, ReplCommand> {
        map(
            alt((preceded(preceded(tag("visit"), multispace1), node_name), node_name)),
            |name| ReplCommand::Visit(name.to_string()),
        )(input)
    }
}

/// `word` as a whole token, so that node names such as `hints` are not read
/// as the `hint` command.
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag(word), peek(alt((multispace1, eof))))
}

fn node_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(ReplCommand::parse("exit"), Some(ReplCommand::Exit));
        assert_eq!(ReplCommand::parse("  hint "), Some(ReplCommand::Hint));
        assert_eq!(
            ReplCommand::parse("engine bfs"),
            Some(ReplCommand::Engine(SearchEngineName::Bfs))
        );
        assert_eq!(
            ReplCommand::parse("visit B"),
            Some(ReplCommand::Visit("B".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("C"),
            Some(ReplCommand::Visit("C".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(ReplCommand::parse("engine gbfs"), None);
        assert_eq!(ReplCommand::parse("visit A B"), None);
        assert_eq!(ReplCommand::parse(""), None);
    }

    #[test]
    fn node_names_starting_with_keywords() {
        for name in ["exit_gate", "hints", "shower", "quitting", "visitor"] {
            assert_eq!(
                ReplCommand::parse(name),
                Some(ReplCommand::Visit(name.to_string())),
                "{}",
                name
            );
        }
        assert_eq!(
            ReplCommand::parse("visit help"),
            Some(ReplCommand::Visit("help".to_string()))
        );
        assert_eq!(ReplCommand::parse("help "), Some(ReplCommand::Help));
    }
}
