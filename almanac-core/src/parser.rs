use std::str::FromStr;

use fxhash::FxHashMap as HashMap;
use log::{debug, info, warn};
use num_traits::{PrimInt, Unsigned};

use crate::errors::{AlmanacError, ConfigError, ParseError, StageError};
use crate::models::{Almanac, MapStage, Pipeline, RangeRule, SeedSpec};

pub mod consts {
    pub const SEEDS_PREFIX: &str = "seeds:";
    pub const HEADER_SUFFIX: &str = "map:";
    pub const RULE_TOKENS: usize = 3;
}

use consts::*;

/// A stage block whose rules are still being read.
struct OpenBlock<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    name: String,
    rules: Vec<RangeRule<I>>,
    /// line number of every rule, in declaration order
    lines: Vec<usize>,
}

///
/// Parse an almanac document.
///
/// The first non-blank line must be `seeds: ...`. Stage blocks follow, each
/// a `<name> map:` header and zero or more `<destination> <source> <length>`
/// lines, separated by blank lines. Stages keep their file order.
///
/// # Arguments
///
/// - input: the full document
///
pub fn parse_almanac<I>(input: &str) -> Result<Almanac<I>, AlmanacError>
where
    I: PrimInt + Unsigned + Send + Sync + FromStr,
{
    let mut seeds: Option<(usize, SeedSpec<I>)> = None;
    let mut stages: Vec<MapStage<I>> = Vec::new();
    let mut stage_lines: HashMap<String, usize> = HashMap::default();
    let mut block: Option<OpenBlock<I>> = None;
    // whether a blank line came since the last content line
    let mut separated = true;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            if let Some(open) = block.take() {
                stages.push(close_block(open)?);
            }
            separated = true;
            continue;
        }
        let was_separated = std::mem::replace(&mut separated, false);

        if let Some(rest) = line.strip_prefix(SEEDS_PREFIX) {
            if let Some((first_line, _)) = &seeds {
                return Err(ConfigError::DuplicateSeeds {
                    line: line_no,
                    first_line: *first_line,
                }
                .into());
            }
            let values = rest
                .split_whitespace()
                .map(|token| parse_token(token, line_no, line))
                .collect::<Result<Vec<I>, _>>()?;
            seeds = Some((line_no, SeedSpec::new(values)));
            continue;
        }

        if seeds.is_none() {
            return Err(ConfigError::MissingSeeds.into());
        }

        if let Some(name) = line.strip_suffix(HEADER_SUFFIX) {
            if !was_separated {
                return Err(ConfigError::MissingSeparator {
                    line: line_no,
                    content: line.to_string(),
                }
                .into());
            }
            // the name and `map:` must be separate words
            let name_ends_word = name.ends_with(char::is_whitespace);
            let name = name.trim();
            if name.is_empty() || !name_ends_word {
                return Err(ParseError::MalformedHeader {
                    line: line_no,
                    content: line.to_string(),
                }
                .into());
            }
            if let Some(first_line) = stage_lines.get(name) {
                return Err(ConfigError::DuplicateStage {
                    name: name.to_string(),
                    line: line_no,
                    first_line: *first_line,
                }
                .into());
            }
            stage_lines.insert(name.to_string(), line_no);
            block = Some(OpenBlock {
                name: name.to_string(),
                rules: Vec::new(),
                lines: Vec::new(),
            });
            continue;
        }

        if line.ends_with(':') {
            return Err(ParseError::MalformedHeader {
                line: line_no,
                content: line.to_string(),
            }
            .into());
        }

        let open = block.as_mut().ok_or_else(|| ParseError::MissingHeader {
            line: line_no,
            content: line.to_string(),
        })?;
        open.rules.push(parse_rule(line, line_no)?);
        open.lines.push(line_no);
    }

    if let Some(open) = block.take() {
        stages.push(close_block(open)?);
    }

    let (_, seeds) = seeds.ok_or(ConfigError::MissingSeeds)?;
    if stages.is_empty() {
        return Err(ConfigError::NoStages.into());
    }

    let pipeline = Pipeline::new(stages);
    for brk in pipeline.chain_breaks() {
        warn!(
            "Stage {:?} reads {:?} values but the previous stage produces {:?}",
            pipeline.stages()[brk.index].name(),
            brk.expected,
            brk.produced
        );
    }
    info!(
        "Parsed {} seed values and {} stages ({} rules)",
        seeds.len(),
        pipeline.len(),
        pipeline.rule_count()
    );

    Ok(Almanac { seeds, pipeline })
}

/// Parse one `<destination> <source> <length>` line.
fn parse_rule<I>(line: &str, line_no: usize) -> Result<RangeRule<I>, ParseError>
where
    I: PrimInt + Unsigned + Send + Sync + FromStr,
{
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != RULE_TOKENS {
        return Err(ParseError::RuleTokenCount {
            line: line_no,
            found: tokens.len(),
            content: line.to_string(),
        });
    }

    let destination_start: I = parse_token(tokens[0], line_no, line)?;
    let source_start: I = parse_token(tokens[1], line_no, line)?;
    let length: I = parse_token(tokens[2], line_no, line)?;

    RangeRule::new(destination_start, source_start, length).map_err(|kind| {
        ParseError::InvalidRule {
            line: line_no,
            content: line.to_string(),
            kind,
        }
    })
}

/// Plain decimal digits only; `FromStr` alone would also take a leading `+`.
fn parse_token<I: FromStr>(token: &str, line_no: usize, line: &str) -> Result<I, ParseError> {
    let invalid = || ParseError::InvalidInteger {
        line: line_no,
        token: token.to_string(),
        content: line.to_string(),
    };
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse::<I>().map_err(|_| invalid())
}

fn close_block<I>(open: OpenBlock<I>) -> Result<MapStage<I>, ConfigError>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    let OpenBlock { name, rules, lines } = open;
    debug!("Stage {:?}: {} rules", name, rules.len());

    MapStage::new(name.as_str(), rules).map_err(|e| match e {
        StageError::OverlappingRules { first, second } => ConfigError::OverlappingRules {
            stage: name,
            first_line: lines[first],
            second_line: lines[second],
        },
    })
}
