//! External tagger process.
//!
//! Drives a long-lived child process (for example a small script wrapping a trained
//! Norwegian model) through its standard streams.
//!
//! Protocol, one line each way per sentence:
//! - stdin: the sentence, followed by `\n`,
//! - stdout: a JSON array of `[form, tag]` pairs, followed by `\n`.
//!
//! ```text
//! > Hun møtte Per i går.
//! < [["Hun","PRON"],["møtte","VERB"],["Per","PROPN"],["i","ADP"],["går","ADV"],[".","PUNCT"]]
//! ```
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::thread;

use log::{debug, info};

use super::{Tagger, Token};
use crate::error::Error;

pub struct ProcessTagger {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl ProcessTagger {
    /// Spawn the tagger process.
    ///
    /// Does *not* check that the process speaks the protocol: this is only known at first batch.
    pub fn spawn(program: &str, args: &[String]) -> Result<Self, Error> {
        info!("spawning tagger {program} {args:?}");
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Tagging(format!("could not start {program}: {e}")))?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        match (stdin, stdout) {
            (Some(stdin), Some(stdout)) => Ok(Self {
                child,
                stdin,
                stdout: BufReader::new(stdout),
            }),
            _ => Err(Error::Tagging(format!(
                "could not attach to {program} standard streams"
            ))),
        }
    }

    /// Spawn from a whitespace-separated command line, such as `python3 tag.py --model nb`.
    ///
    /// There is no shell-like quoting: arguments cannot contain spaces.
    /// Use [ProcessTagger::spawn] (or a wrapper script) for those.
    pub fn from_command_line(cmd: &str) -> Result<Self, Error> {
        let mut parts = cmd.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| Error::Config("empty tagger command".to_string()))?;
        let args: Vec<String> = parts.map(String::from).collect();
        Self::spawn(program, &args)
    }
}

fn read_answer(stdout: &mut BufReader<ChildStdout>) -> Result<Vec<Token>, Error> {
    let mut line = String::new();
    if stdout.read_line(&mut line)? == 0 {
        return Err(Error::Tagging("tagger process closed its output".to_string()));
    }
    serde_json::from_str(line.trim_end())
        .map_err(|e| Error::Tagging(format!("invalid tagger answer {:?}: {e}", line.trim_end())))
}

impl Tagger for ProcessTagger {
    fn tag(&mut self, sentences: &[&str]) -> Result<Vec<Vec<Token>>, Error> {
        debug!("tagging a batch of {} sentences", sentences.len());

        // a line break would split a sentence in two protocol lines,
        // and shift every following answer.
        if let Some(sentence) = sentences.iter().find(|s| s.contains(&['\n', '\r'][..])) {
            return Err(Error::Tagging(format!(
                "sentence {sentence:?} contains a line break"
            )));
        }

        // writing happens on another thread, so that the child never blocks
        // on a full stdout pipe while we are still feeding its stdin.
        let Self {
            child,
            stdin,
            stdout,
        } = self;
        thread::scope(|scope| {
            let writer = scope.spawn(move || -> std::io::Result<()> {
                for sentence in sentences {
                    stdin.write_all(sentence.as_bytes())?;
                    stdin.write_all(b"\n")?;
                }
                stdin.flush()
            });

            let answers: Result<Vec<Vec<Token>>, Error> =
                (0..sentences.len()).map(|_| read_answer(stdout)).collect();

            // unblock the writer if we stopped reading early
            if answers.is_err() {
                if let Err(e) = child.kill() {
                    debug!("tagger already stopped: {e}");
                }
            }

            match (answers, writer.join()) {
                (Err(e), _) => Err(e),
                (Ok(answers), Ok(Ok(()))) => Ok(answers),
                (Ok(_), Ok(Err(e))) => Err(Error::Tagging(format!("could not feed tagger: {e}"))),
                (Ok(_), Err(_)) => Err(Error::Tagging("tagger feeding thread panicked".to_string())),
            }
        })
    }
}

impl Drop for ProcessTagger {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            debug!("could not stop tagger process: {e}");
        }
        // reap to avoid zombies
        let _ = self.child.wait();
    }
}
