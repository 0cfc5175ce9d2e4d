pub mod os_random;
