use std::error::Error;
use std::io::BufRead;
use crate::greedy::{self, GreedyConfig};
use crate::incidence::IncidenceStore;

/// A weighted set cover instance as read from text.
///
/// Format: `c` lines are comments, `p sc <n> <J>` is the header, followed by `J` lines of the form
/// `<weight> <e1> <e2> ...` with 0-based elements. Set `j` is the `j`-th such line.
pub struct Instance {
    pub n: usize,
    pub store: IncidenceStore,
    pub weights: Vec<f64>,
}

impl Instance {
    pub fn new(n: usize, store: IncidenceStore, weights: Vec<f64>) -> Instance {
        Instance { n, store, weights }
    }

    pub fn from_stdin() -> Result<Instance, Box<dyn Error>> {
        Instance::from_reader(std::io::stdin().lock())
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Instance, Box<dyn Error>> {
        let mut header: Option<(usize, usize)> = None;
        let mut sets: Vec<Vec<usize>> = Vec::new();
        let mut weights: Vec<f64> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let ll: Vec<&str> = line.split_whitespace().collect();
            if ll.is_empty() {
                continue;
            }
            match ll[0] {
                "c" => {} // skip comments
                "p" => { // parse header
                    if header.is_some() {
                        return Err(From::from("c Found a second p-line. Abort!"));
                    }
                    if ll.len() != 4 || ll[1] != "sc" {
                        return Err(From::from("c Expected header of the form 'p sc <n> <sets>'. Abort!"));
                    }
                    let n = ll[2].parse::<usize>()?;
                    let m = ll[3].parse::<usize>()?;
                    header = Some((n, m));
                },
                _ => { // parse a set
                    match header {
                        None => return Err(From::from("c Found set before p-line. Abort!")),
                        Some((_, m)) => {
                            if sets.len() == m {
                                return Err(format!("c Found more than the {m} announced sets. Abort!").into());
                            }
                            weights.push(ll[0].parse::<f64>()?);
                            let set = ll[1..].iter().map(|e| e.parse::<usize>()).collect::<Result<Vec<usize>, _>>()?;
                            sets.push(set);
                        }
                    }
                }
            }
        }
        match header {
            Some((n, m)) => {
                if sets.len() != m {
                    return Err(format!("c Expected {m} sets but found {}. Abort!", sets.len()).into());
                }
                Ok(Instance::new(n, IncidenceStore::from_sets(sets), weights))
            },
            None => Err(From::from("c Failed to parse an instance! Maybe the input was empty?"))
        }
    }

    pub fn solve(&self, config: &GreedyConfig) -> crate::Result<Vec<usize>> {
        greedy::solve_with(&self.store, &self.weights, self.n, config)
    }
}
