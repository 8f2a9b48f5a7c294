//! Interactive driver session.
//!
//! Owns the web, the token scanner and the run modes, and walks the
//! user through the protocol: build phase, initial report, then the
//! modification loop unless basic mode is on. Validation failures are
//! printed and skipped; only input errors abort the session.

use crate::modes::Modes;
use crate::scanner::Scanner;
use colored::Colorize;
use foodweb_graph::{FoodWeb, WebError};
use std::io::{self, BufRead, Write};
use tracing::debug;

const SEPARATOR: &str = "--------------------------------";

/// One interactive run over a token stream.
pub struct Session<R> {
    modes: Modes,
    scanner: Scanner<R>,
    web: FoodWeb,
}

impl<R: BufRead> Session<R> {
    /// Creates a session reading tokens from `input`.
    pub fn new(modes: Modes, input: R) -> Self {
        Self {
            modes,
            scanner: Scanner::new(input),
            web: FoodWeb::new(),
        }
    }

    /// Runs the whole protocol to completion.
    pub fn run(&mut self) -> io::Result<()> {
        println!("Welcome to the Food Web Application\n");
        println!("{}\n", SEPARATOR);

        self.build_phase()?;
        println!();

        println!("{}\n", SEPARATOR);
        println!("Initial food web complete.");
        println!("Displaying characteristics for the initial food web...");
        self.display_all(false);

        if !self.modes.basic {
            self.modify_loop()?;
        }

        Ok(())
    }

    /// Build phase: names until `DONE`, then relation pairs until the
    /// first invalid pair.
    fn build_phase(&mut self) -> io::Result<()> {
        println!("Building the initial food web...");

        loop {
            self.prompt("Enter the name for an organism in the web (or enter DONE): ")?;
            // End of input builds the web we have so far.
            let name = self
                .scanner
                .next_token()?
                .unwrap_or_else(|| "DONE".to_string());
            if !self.modes.quiet {
                println!();
            }
            if name == "DONE" {
                break;
            }
            self.web.add_organism(name);
            self.debug_dump("added an organism");
        }
        if !self.modes.quiet {
            println!();
        }

        loop {
            if !self.modes.quiet {
                println!("Enter the pair of indices for a predator/prey relation.");
                println!("Enter any invalid index when done (-1 2, 0 -9, 3 3, etc.).");
            }
            self.prompt("The format is <predator index> <prey index>: ")?;

            let pred = self.scanner.next_int()?.unwrap_or(-1);
            let prey = self.scanner.next_int()?.unwrap_or(-1);
            if !self.modes.quiet {
                println!();
            }

            // The terminating pair is not added.
            let n = self.web.len() as i64;
            if pred < 0 || prey < 0 || pred >= n || prey >= n || pred == prey {
                debug!(pred, prey, "relation phase terminated");
                break;
            }

            // Only a duplicate can fail here; report it and keep going.
            if let Err(e) = self.web.add_relation(pred as usize, prey as usize) {
                println!("{}", e.to_string().red());
            }
            self.debug_dump("added a relation");
        }

        Ok(())
    }

    /// Command loop on single-character tokens until `q` (or end of
    /// input, which quits too).
    fn modify_loop(&mut self) -> io::Result<()> {
        println!("{}\n", SEPARATOR);
        print!("Modifying the food web...");
        io::stdout().flush()?;

        loop {
            if !self.modes.quiet {
                println!("Web modification options:");
                println!("   o = add a new organism (expansion)");
                println!("   r = add a new predator/prey relation (supplementation)");
                println!("   x = remove an organism (extinction)");
                println!("   p = print the updated food web");
                println!("   d = display ALL characteristics for the updated food web");
                println!("   q = quit");
                self.prompt("Enter a character (o, r, x, p, d, or q): ")?;
            }
            let opt = self
                .scanner
                .next_token()?
                .and_then(|t| t.chars().next())
                .unwrap_or('q');
            println!("\n");

            match opt {
                'o' => self.expansion()?,
                'r' => self.supplementation()?,
                'x' => self.extinction()?,
                'p' => {
                    println!("UPDATED Food Web Predators & Prey:");
                    print!("{}", self.web);
                    println!();
                }
                'd' => {
                    println!("Displaying characteristics for the UPDATED food web...\n");
                    self.display_all(true);
                }
                _ => {}
            }

            print!("{}", SEPARATOR);
            io::stdout().flush()?;
            if opt == 'q' {
                break;
            }
        }

        Ok(())
    }

    /// `o`: add a new organism.
    fn expansion(&mut self) -> io::Result<()> {
        self.prompt("EXPANSION - enter the name for the new organism: ")?;
        let name = self.scanner.next_token()?.unwrap_or_default();
        if !self.modes.quiet {
            println!();
        }
        println!("Species Expansion: {}", name);
        self.web.add_organism(name);
        println!();
        self.debug_dump("added an organism");
        Ok(())
    }

    /// `r`: add a new predator/prey relation.
    fn supplementation(&mut self) -> io::Result<()> {
        if !self.modes.quiet {
            println!("SUPPLEMENTATION - enter the pair of indices for the new predator/prey relation.");
        }
        self.prompt("The format is <predator index> <prey index>: ")?;
        let pred = self.scanner.next_int()?.unwrap_or(-1);
        let prey = self.scanner.next_int()?.unwrap_or(-1);
        if !self.modes.quiet {
            println!();
        }

        match self.add_relation_checked(pred, prey) {
            Ok((p, q)) => {
                if let (Some(a), Some(b)) = (self.web.get(p), self.web.get(q)) {
                    println!("New Food Source: {} eats {}", a.name, b.name);
                }
            }
            Err(e) => println!("{}", e.to_string().red()),
        }
        println!();
        self.debug_dump("added a relation");
        Ok(())
    }

    /// `x`: remove an organism.
    fn extinction(&mut self) -> io::Result<()> {
        self.prompt("EXTINCTION - enter the index for the extinct organism: ")?;
        let index = self.scanner.next_int()?.unwrap_or(-1);
        if !self.modes.quiet {
            println!();
        }

        if index >= 0 && (index as usize) < self.web.len() {
            match self.web.remove_organism(index as usize) {
                Ok(removed) => println!("Species Extinction: {}", removed.name),
                Err(e) => println!("{}", e.to_string().red()),
            }
        } else {
            println!("{}", "Invalid index for species extinction".red());
        }
        println!();
        self.debug_dump("removed an organism");
        Ok(())
    }

    /// Rejects negative indices before they can wrap to usize.
    fn add_relation_checked(&mut self, pred: i64, prey: i64) -> Result<(usize, usize), WebError> {
        if pred < 0 || prey < 0 {
            return Err(WebError::InvalidRelation);
        }
        let (p, q) = (pred as usize, prey as usize);
        self.web.add_relation(p, q)?;
        Ok((p, q))
    }

    /// Prints the full report: listing, apex predators, producers,
    /// most flexible eaters, tastiest food, heights, vore types.
    fn display_all(&self, modified: bool) {
        let prefix = if modified { "UPDATED " } else { "" };

        println!("{}Food Web Predators & Prey:", prefix);
        print!("{}", self.web);
        println!();

        println!("{}Apex Predators:", prefix);
        self.print_names(&self.web.apex_predators());
        println!();

        println!("{}Producers:", prefix);
        self.print_names(&self.web.producers());
        println!();

        println!("{}Most Flexible Eaters:", prefix);
        self.print_names(&self.web.most_flexible_eaters());
        println!();

        println!("{}Tastiest Food:", prefix);
        self.print_names(&self.web.tastiest_food());
        println!();

        println!("{}Food Web Heights:", prefix);
        match self.web.heights() {
            Ok(heights) => {
                for (org, h) in self.web.organisms().zip(heights) {
                    println!("  {}: {}", org.name, h);
                }
            }
            Err(e) => println!("  {}", e.to_string().red()),
        }
        println!();

        println!("{}Vore Types:", prefix);
        let report = self.web.vore_report();
        println!("  Producers:");
        self.print_names_deep(&report.producers);
        println!("  Herbivores:");
        self.print_names_deep(&report.herbivores);
        println!("  Omnivores:");
        self.print_names_deep(&report.omnivores);
        println!("  Carnivores:");
        self.print_names_deep(&report.carnivores);
        println!();
    }

    fn print_names(&self, indices: &[usize]) {
        for &i in indices {
            if let Some(org) = self.web.get(i) {
                println!("  {}", org.name);
            }
        }
    }

    fn print_names_deep(&self, indices: &[usize]) {
        for &i in indices {
            if let Some(org) = self.web.get(i) {
                println!("    {}", org.name);
            }
        }
    }

    /// Prints prompt text without a newline, unless quiet.
    fn prompt(&self, text: &str) -> io::Result<()> {
        if !self.modes.quiet {
            print!("{}", text);
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn debug_dump(&self, what: &str) {
        if self.modes.debug {
            println!("{}", format!("DEBUG MODE - {}:", what).yellow());
            print!("{}", self.web);
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(modes: Modes, input: &str) -> Session<Cursor<String>> {
        let mut session = Session::new(modes, Cursor::new(input.to_string()));
        session.run().unwrap();
        session
    }

    fn quiet() -> Modes {
        Modes {
            quiet: true,
            ..Modes::default()
        }
    }

    #[test]
    fn test_build_phase_constructs_chain() {
        // A eats B, B eats C; terminate relations with 0 0; then quit.
        let session = run(quiet(), "A B C DONE\n0 1\n1 2\n0 0\nq\n");
        assert_eq!(session.web.len(), 3);
        assert_eq!(session.web.apex_predators(), vec![0]);
        assert_eq!(session.web.producers(), vec![2]);
        assert_eq!(session.web.heights().unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_basic_mode_skips_modification() {
        let modes = Modes {
            basic: true,
            quiet: true,
            debug: false,
        };
        // No command tokens at all: basic mode never reads them.
        let session = run(modes, "Grass DONE\n-1 -1\n");
        assert_eq!(session.web.len(), 1);
    }

    #[test]
    fn test_terminating_pair_not_added() {
        // 3 3 is self-referential and ends the loop without adding.
        let session = run(quiet(), "A B DONE\n0 1\n1 1\nq\n");
        assert_eq!(session.web.get(0).unwrap().prey, vec![1]);
        assert!(session.web.get(1).unwrap().is_producer());
    }

    #[test]
    fn test_duplicate_relation_in_build_is_skipped() {
        let session = run(quiet(), "A B DONE\n0 1\n0 1\n-1 0\nq\n");
        assert_eq!(session.web.get(0).unwrap().prey, vec![1]);
    }

    #[test]
    fn test_expansion_and_supplementation() {
        let session = run(quiet(), "Hawk DONE\n-1 -1\no\nMouse\nr\n0 1\nq\n");
        assert_eq!(session.web.len(), 2);
        assert_eq!(session.web.get(1).unwrap().name, "Mouse");
        assert!(session.web.get(0).unwrap().eats(1));
    }

    #[test]
    fn test_extinction_repairs_web() {
        let session = run(quiet(), "A B C DONE\n0 1\n1 2\n0 0\nx\n1\nq\n");
        assert_eq!(session.web.len(), 2);
        assert!(session.web.get(0).unwrap().is_producer());
        assert_eq!(session.web.get(1).unwrap().name, "C");
    }

    #[test]
    fn test_invalid_extinction_index_leaves_web_alone() {
        let session = run(quiet(), "A B DONE\n-1 -1\nx\n7\nx\n-2\nq\n");
        assert_eq!(session.web.len(), 2);
    }

    #[test]
    fn test_negative_supplementation_is_rejected() {
        let session = run(quiet(), "A B DONE\n-1 -1\nr\n-1 0\nq\n");
        assert!(session.web.get(0).unwrap().is_producer());
        assert!(session.web.get(1).unwrap().is_producer());
    }

    #[test]
    fn test_end_of_input_quits_cleanly() {
        // Input stops mid-protocol: names end without DONE, then EOF.
        let session = run(quiet(), "A B");
        assert_eq!(session.web.len(), 2);
    }

    #[test]
    fn test_unknown_command_reloops() {
        let session = run(quiet(), "A DONE\n-1 -1\nz\no\nOwl\nq\n");
        assert_eq!(session.web.len(), 2);
    }
}
