#[cfg(test)]
mod common;

#[cfg(test)]
mod block_tests;

#[cfg(test)]
mod circle_tests;




#[cfg(test)]
mod wrapper_tests;

#[cfg(test)]
mod theme_tests;
