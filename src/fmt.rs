//! Logging macros. With the `defmt` feature these forward to `defmt`, without it they compile to
//! nothing so the crate can be built and tested on the host without a global logger.
#![allow(unused)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = &$x; )*
            }
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = &$x; )*
            }
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = &$x; )*
            }
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            {
                $( let _ = &$x; )*
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[deny(unused_parens, unused_variables)]
    fn expands_cleanly_for_any_argument_count() {
        let frames = 3u16;
        let leds = 30usize;
        trace!("no arguments");
        debug!("one argument {}", frames);
        info!("two arguments {} {}", frames, leds);
        warn!("trailing comma {}", leds,);
    }
}
