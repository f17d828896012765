use std::{env, process};

use prepnet::{labels, Label};

fn parse_labels<I>(args: I) -> Result<Vec<Label>, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Vec::new();
    for arg in args {
        for token in arg.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let label = token
                .parse::<Label>()
                .map_err(|e| format!("invalid label {token:?}: {e}"))?;
            parsed.push(label);
        }
    }
    Ok(parsed)
}

fn main() {
    let result = parse_labels(env::args().skip(1))
        .and_then(|l| labels::print_unique(&l).map_err(|e| e.to_string()));
    if let Err(e) = result {
        eprintln!("prepnet: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::parse_labels;

    #[test]
    fn splits_on_commas_and_whitespace() {
        let args = ["3,1".to_string(), " 3 2".to_string(), "1,".to_string()];
        assert_eq!(parse_labels(args).unwrap(), vec![3, 1, 3, 2, 1]);
    }

    #[test]
    fn rejects_negative_labels() {
        assert!(parse_labels(["-1".to_string()]).is_err());
    }
}
