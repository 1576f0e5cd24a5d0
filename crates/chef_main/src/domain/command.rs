use chef_domain::{Language, RequestId};

/// Side effects requested by [`crate::domain::update`]. The executor is the
/// only place they are carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Exit,
    FetchMenu { request_id: RequestId, language: Language },
    And(Vec<Command>),
}

impl Command {
    /// Sequences two commands, dropping `Empty` and flattening nested lists.
    pub fn and(self, other: Command) -> Command {
        let mut commands = self.into_vec();
        commands.extend(other.into_vec());
        match commands.len() {
            0 => Command::Empty,
            1 => commands.remove(0),
            _ => Command::And(commands),
        }
    }

    pub fn into_vec(self) -> Vec<Command> {
        match self {
            Command::Empty => vec![],
            Command::And(commands) => commands.into_iter().flat_map(Command::into_vec).collect(),
            command => vec![command],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_and_drops_empty() {
        let actual = Command::Empty.and(Command::Exit);
        let expected = Command::Exit;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_and_flattens() {
        let fetch = Command::FetchMenu { request_id: RequestId::new(1), language: Language::En };
        let actual = Command::Empty
            .and(fetch.clone())
            .and(Command::Empty)
            .and(Command::Exit);
        let expected = Command::And(vec![fetch, Command::Exit]);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_empty_and_empty_is_empty() {
        assert_eq!(Command::Empty.and(Command::Empty), Command::Empty);
    }
}
