use gonzo::error::{GonzoError, Result};
use log::debug;
use std::io::{self, ErrorKind, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

/// Where `read` and `list` output goes: the pager's stdin, or our own stdout.
///
/// A reader that goes away early (quitting the pager, `| head`) is not an
/// error; further writes are dropped.
pub enum Output {
    Direct {
        out: io::Stdout,
        closed: bool,
    },
    Pager {
        program: String,
        child: Child,
        stdin: Option<ChildStdin>,
    },
}

impl Output {
    pub fn open(pager: Option<&str>) -> Result<Self> {
        let Some(command) = pager else {
            return Ok(Self::direct());
        };
        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            return Ok(Self::direct());
        };

        debug!("spawning pager {}", command);
        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                GonzoError::Process(format!("Failed to launch pager '{}': {}", program, e))
            })?;
        let stdin = child.stdin.take();

        Ok(Output::Pager {
            program: program.to_string(),
            child,
            stdin,
        })
    }

    fn direct() -> Self {
        Output::Direct {
            out: io::stdout(),
            closed: false,
        }
    }

    pub fn write_str(&mut self, text: &str) -> Result<()> {
        let outcome = match self {
            Output::Direct { closed: true, .. } => return Ok(()),
            Output::Direct { out, .. } => out.write_all(text.as_bytes()),
            Output::Pager { stdin: None, .. } => return Ok(()),
            Output::Pager {
                stdin: Some(pipe), ..
            } => pipe.write_all(text.as_bytes()),
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("reader went away, dropping remaining output");
                match self {
                    Output::Direct { closed, .. } => *closed = true,
                    Output::Pager { stdin, .. } => *stdin = None,
                }
                Ok(())
            }
            Err(e) => Err(GonzoError::Io(e)),
        }
    }

    /// Flushes, closes the pipe, and waits for the pager to exit.
    pub fn finish(self) -> Result<()> {
        match self {
            Output::Direct { mut out, closed } => {
                if !closed {
                    match out.flush() {
                        Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                            return Err(GonzoError::Io(e))
                        }
                        _ => {}
                    }
                }
                Ok(())
            }
            Output::Pager {
                program,
                mut child,
                stdin,
            } => {
                drop(stdin);
                let status = child.wait().map_err(GonzoError::Io)?;
                if !status.success() {
                    return Err(GonzoError::Process(format!(
                        "Pager '{}' exited with {}",
                        program, status
                    )));
                }
                Ok(())
            }
        }
    }
}
