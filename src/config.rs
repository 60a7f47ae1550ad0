use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Pos;
use crate::movement::Movement;

/// Order in which the solver explores states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    Greedy,
    AStar,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::BreadthFirst,
        Method::DepthFirst,
        Method::UniformCost,
        Method::Greedy,
        Method::AStar,
    ];
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::BreadthFirst => write!(f, "bfs"),
            Method::DepthFirst => write!(f, "dfs"),
            Method::UniformCost => write!(f, "ucs"),
            Method::Greedy => write!(f, "greedy"),
            Method::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Method::BreadthFirst),
            "dfs" => Ok(Method::DepthFirst),
            "ucs" => Ok(Method::UniformCost),
            "greedy" => Ok(Method::Greedy),
            "astar" | "a*" => Ok(Method::AStar),
            _ => Err(format!("Unknown method: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Euclidean,
    Manhattan,
}

impl Metric {
    pub fn distance(self, from: Pos, to: Pos) -> f64 {
        match self {
            Metric::Euclidean => from.euclidean(to),
            Metric::Manhattan => f64::from(from.manhattan(to)),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Euclidean
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Metric::Euclidean => write!(f, "euclidean"),
            Metric::Manhattan => write!(f, "manhattan"),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            _ => Err(format!("Unknown metric: {}", s)),
        }
    }
}

/// Which goal policy to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    /// Head for the exit the whole time.
    Exit,
    /// Head for the nearest uncollected box, then the exit.
    Collector,
}

impl Display for AgentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            AgentKind::Exit => write!(f, "exit"),
            AgentKind::Collector => write!(f, "collector"),
        }
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exit" => Ok(AgentKind::Exit),
            "collector" => Ok(AgentKind::Collector),
            _ => Err(format!("Unknown agent: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub movement: Movement,
    pub method: Method,
    pub agent: AgentKind,
    pub metric: Metric,
    /// Only used by the collector.
    pub box_penalty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            movement: Movement::Default,
            method: Method::AStar,
            agent: AgentKind::Collector,
            metric: Metric::Euclidean,
            box_penalty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for &method in &Method::ALL {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
        assert_eq!("A*".parse::<Method>(), Ok(Method::AStar));
        assert!("dijkstra".parse::<Method>().is_err());

        for &metric in &[Metric::Euclidean, Metric::Manhattan] {
            assert_eq!(metric.to_string().parse::<Metric>(), Ok(metric));
        }
        for &agent in &[AgentKind::Exit, AgentKind::Collector] {
            assert_eq!(agent.to_string().parse::<AgentKind>(), Ok(agent));
        }
    }

    #[test]
    fn metrics() {
        let a = Pos::new(1, 1);
        let b = Pos::new(4, 5);
        assert_eq!(Metric::Euclidean.distance(a, b), 5.0);
        assert_eq!(Metric::Manhattan.distance(a, b), 7.0);
        assert_eq!(Metric::default(), Metric::Euclidean);
    }
}
